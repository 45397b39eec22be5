/*!
# Expressions and Variables

NanoBASIC has one type: a signed integer. It is 16 bits wide unless the
crate is built with the `wide` feature, which makes it 32 bits.
Arithmetic wraps around instead of overflowing.

There are 26 variables named `A` to `Z` and one array named `@`.
Array elements are written `@[I]` and indices start at 0. Variables
and the array are cleared by `RUN`, `PROG` and `LOAD`.

```text
A=5:@[A]=A*A:PRINT @[5]
25
```

## Literals

Decimal numbers are written as usual. Hexadecimal numbers start with
`$` or `0X`.

```text
PRINT $FF,0X10
255	16
```

## Operators

From the lowest to the highest precedence.

| Operators | Meaning |
|---|---|
| `&` `&&` `\|` `\|\|` `^` | bitwise and, logical and, bitwise or, logical or, exclusive or |
| `==` `=` `!=` `<>` `<` `<=` `>` `>=` `<<` `>>` | comparison, 1 when true and 0 when false, and shifts |
| `+` `-` | addition and subtraction |
| `*` `/` `%` | multiplication, division and remainder |
| `-` `+` `!` `~` | negation, identity, logical not and bitwise not |

Operators of the same precedence are evaluated left to right.
Division and remainder by zero are errors. Shifting by more than the
width of the integer gives 0, or -1 when shifting a negative number
right.

## Assignment

Besides `=`, a variable can be updated in place.

```text
A=10
A+=5:A-=1:A*=2:A/=7:A%=3
A|=8:A&=12:A^=1:A<<=2:A>>=1
A++:A--
```

*/
