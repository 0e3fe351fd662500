/*!
# `RETURN`

## Purpose
`RETURN` is used at the end of a subroutine.

## Remarks
See `GOSUB`. Without an open `GOSUB` the error is
`RETURN WITHOUT GOSUB`.

*/
