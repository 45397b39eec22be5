/*!
# `SAVE [<expression>]`

## Purpose
Write the program to the EEPROM.

## Remarks
When the expression is not zero the program runs automatically at
power-on. Saving an empty program erases the EEPROM record.

*/
