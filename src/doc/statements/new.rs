/*!
# `NEW`

## Purpose
Erase the program and all variables.

*/
