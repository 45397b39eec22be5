/*!
# `GOTO <label>`

## Purpose
Continue execution at the line with the label.

## Remarks
The label may be any expression. `Label not found` is reported when no
line starts with that number.

## Example
```text
10 PRINT "FOREVER"
20 GOTO 10
```

*/
