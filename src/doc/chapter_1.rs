/*!
# Expressions and Types

There are two kinds of data: numbers and strings. Variable names are
letters; a name ending in `$` holds a string. `A` and `A$` are different
variables. Unset variables are zero or the empty string.

```text
LET PI = 3.14159
NAME$ = "ZAPHOD"
```

Whole numbers are kept exactly. Arithmetic that doesn't fit, or a
division that doesn't come out even, gives a floating point number with
about six digits of precision.

```text
PRINT 7/2, 8/2, 100000*100000
 3.5             4               1E+10
```

Arrays have one dimension and need no declaration. Subscripts run from 0
to 4095. An array and a plain variable of the same name are separate.

```text
A(3) = 10 : PRINT A(3), A
 10              0
```

## Operators

From lowest to highest precedence.

| Operator | Meaning |
|---|---|
| `= <> >< < > <= >= =< =>` | Comparison, 1 when true, 0 when false |
| `+ -` | Addition and subtraction |
| `* /` | Multiplication and division |
| `-` | Negation |

Strings can be compared but not added. Mixing a string and a number is a
`TYPE MISMATCH`.

The next two chapters are a reference for statements and functions.

*/
