/*!
# `END`

## Purpose
End the program.

## Remarks
Reaching the last line has the same effect.

*/
