/*!
# `RETURN`

## Purpose
Return from a subroutine called with `GOSUB`.

## Remarks
Loops still open inside the subroutine are discarded.
Without a `GOSUB` the error is `Unexpected Return`.

*/
