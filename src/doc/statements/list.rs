/*!
# `LIST`

## Purpose
Print the program followed by its size in bytes.

*/
