/*!
# Error Messages

Errors are printed on their own line. When a program was running the
line number follows, counted from the top of the program.

```text
PRINT 10/0
Division by 0 error
RUN
Endif not found error in 12
```

| Message | Cause |
|---|---|
| `Syntax error` | A statement or expression is malformed. |
| `Division by 0 error` | `/`, `%`, `/=` or `%=` by zero. |
| `Array index over error` | `@[I]` outside the array. |
| `Parameter error` | A pin, channel, duty or `DATA` value that can't be used. |
| `Stack overflow error` | Too many nested loops and subroutines. |
| `Can't resume error` | `RESUME` without a stopped program. |
| `Label not found error` | `GOTO`, `GOSUB` or `THEN` to a missing label. |
| `Run mode error` | `PROG` inside a program. |
| `PG area overflow error` | The program doesn't fit in memory or the EEPROM. |
| `PG empty error` | `LOAD` with no valid saved program. |
| `Loop not found error` | `WHILE` without a matching `LOOP`. |
| `Endif not found error` | Block `IF` without a matching `ENDIF`. |
| `Expression too deep error` | Too many nested parentheses or operators. |
| `Line too long error` | The line doesn't fit once encoded. |
| `Unexpected Next error` | `NEXT` without a `FOR`, or for another variable. |
| `Unexpected Return error` | `RETURN` without a `GOSUB`. |
| `Unexpected Loop error` | `LOOP` without a `DO` or `WHILE`. |
| `Unexpected Exit error` | `EXIT` outside a loop. |
| `Unexpected Continue error` | `CONTINUE` outside a loop. |
| `Unexpected Read error` | `READ` with no `DATA` in the program. |
| `Break` | CTRL-C. |

*/
