/*!
# `RUN`

## Purpose
Clear the variables and run the program from the first line.

*/
