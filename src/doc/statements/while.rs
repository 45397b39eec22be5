/*!
# `DO`, `WHILE <expression>` and `LOOP [WHILE <expression>]`

## Purpose
Repeat the statements up to the matching `LOOP`.

## Remarks
`DO` loops forever unless `LOOP WHILE` is given. `WHILE` tests its
condition before each pass and skips past the `LOOP` when it is false.
`EXIT` leaves the innermost loop and `CONTINUE` goes to its `LOOP`.

## Example
```text
I=0:DO:I++:PRINT I;:LOOP WHILE I<3
123
I=3:WHILE I:PRINT I:I--:LOOP
3
2
1
```

*/
