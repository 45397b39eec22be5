/*!
# `RESTORE`

## Purpose
Make the next `READ` start at the first `DATA`.

*/
