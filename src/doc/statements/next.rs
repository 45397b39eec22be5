/*!
# `NEXT [<variable>]`

## Purpose
Mark the end of a `FOR` loop.

## Remarks
When a variable is given it must be the one of the innermost `FOR`.
Otherwise the error is `Unexpected Next`.

*/
