/*!
# `FOR <variable>=<expression> TO <expression> [STEP <expression>]`

## Purpose
Repeat the statements up to the matching `NEXT`.

## Remarks
The body always runs at least once. `STEP` defaults to 1 and may be
negative. `EXIT` leaves the loop and `CONTINUE` starts the next pass.

## Example
```text
FOR I=10 TO 1 STEP -3:PRINT I;" ";:NEXT I
10 7 4 1
```

*/
