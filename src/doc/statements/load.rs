/*!
# `LOAD`

## Purpose
Replace the program with the one in the EEPROM and clear the
variables.

## Remarks
`PG empty` is reported when the EEPROM holds no valid program; the
current program is left alone.

*/
