/*!
# `STOP` and `RESUME`

## Purpose
`STOP` ends the program so that `RESUME` can continue after it.

## Remarks
`RESUME` also continues a program stopped with CTRL-C at the statement
that was interrupted. Without a place to resume the error is
`Can't resume`. Editing the program forgets the place.

*/
