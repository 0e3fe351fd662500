/*!
# Error Messages

Errors print a word saying how bad things are, then what went wrong and
the line it happened in.

```text
10 PRINT 1/0
RUN
HOW?
DIVISION BY ZERO IN 10
10 PRINT 1/0
         ^^^
```

## `WHAT?`
The line couldn't be understood. Nothing was stored or run.

| Message | Cause |
|---|---|
| `UNTERMINATED STRING` | A `"` without its partner. |
| `UNEXPECTED CHARACTER` | A character BASIC has no use for. |
| `SYNTAX ERROR` | Words in an order BASIC doesn't accept. |
| `DIRECT STATEMENT IN FILE` | A line without a number in a program file. |

## `HOW?`
The statement was understood but can't be done.

| Message | Cause |
|---|---|
| `TYPE MISMATCH` | A string where a number belongs, or the reverse. |
| `DIVISION BY ZERO` | |
| `ILLEGAL FUNCTION CALL` | A negative `ON` value, `TAB` outside `PRINT`, `AT` off the screen. |
| `UNDEFINED LINE` | `GOTO`, `GOSUB` or `RUN` to a line that isn't there. |
| `NEXT WITHOUT FOR` | |
| `RETURN WITHOUT GOSUB` | |
| `OUT OF DATA` | `READ` past the last `DATA` element. |
| `CAN'T CONTINUE` | `CONT` with nothing stopped. |
| `FILE NOT FOUND` | |
| `I/O ERROR` | |
| `OVERFLOW` | A number too large for the machine. |
| `SUBSCRIPT OUT OF RANGE` | An array subscript below 0 or above 4095. |

## `SORRY`
| Message | Cause |
|---|---|
| `OUT OF MEMORY` | More than 64 `FOR` loops or 128 `GOSUB` calls open. |

*/
