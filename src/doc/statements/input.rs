/*!
# `INPUT <variable>[$]`

## Purpose
Read a number typed at the console into a variable.

## Remarks
The line may start with a minus sign. Hexadecimal is accepted with a
`$` or `0X` prefix. Anything that isn't a number reads as 0.
With `$` after the variable the code of the first character typed is
stored instead.

## Example
```text
INPUT A:PRINT A*2
21
42
```

*/
