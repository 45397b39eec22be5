/*!
# `READ <variable>`

## Purpose
Assign the next value from the `DATA` statements to a variable.

## Remarks
Values are read in program order. After the last one `READ` starts over
at the first `DATA` once more; a program with no `DATA` reports
`Unexpected Read`.

## Example
```text
PROG
>READ A:READ B:PRINT A+B
>DATA 20,22
>#
RUN
42
```

*/
