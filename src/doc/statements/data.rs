/*!
# `DATA <list of expressions>`

## Purpose
Values for `READ`.

## Remarks
`DATA` does nothing when it is executed.

*/
