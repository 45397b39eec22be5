/*!
# `GOSUB <label>`

## Purpose
Save the position after the `GOSUB` on the stack and continue at the
line with the label.

## Remarks
`RETURN` will return execution to the position on the stack.

## Example
```text
PROG
>GOSUB 100
>PRINT "WORLD"
>END
>100 PRINT "HELLO ";
>RETURN
>#
RUN
HELLO WORLD
```

*/
