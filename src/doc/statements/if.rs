/*!
# `IF <expression> THEN ...`

## Purpose
Run statements only when the expression is not zero.

## Remarks
When something follows `THEN` on the same line the whole `IF` lives on
that line with an optional `ELSE`. A label after `THEN` or `ELSE` is a
jump to that line.

When `THEN` ends the line the `IF` is a block closed by `ENDIF`, with
optional `ELSEIF <expression> THEN` and `ELSE` sections. Blocks nest.

## Example
```text
IF A>5 THEN PRINT "BIG" ELSE PRINT "SMALL"
IF A THEN 100
PROG
>IF A==1 THEN
>PRINT "ONE"
>ELSEIF A==2 THEN
>PRINT "TWO"
>ELSE
>PRINT "MANY"
>ENDIF
>#
```

*/
