/*!
# `PRINT [<list of items>]`

## Purpose
Output numbers and text to the console.

## Remarks
A `PRINT` by itself outputs a newline.
A semicolon (;) between items prints nothing between them and a comma (,)
prints a tab. Either one at the end suppresses the newline.

Strings may contain the escapes `\n`, `\r`, `\t`, `\e`, `\0`
and `\xHH`. `CHR(X)` prints the character X, or two characters when X is
larger than 255.

`0(X,W)` prints X in decimal right aligned in a field of W characters.
A negative W pads with zeros instead of spaces. Widths above 100 add a
decimal point: `0(X,205)` prints X with 5 digits, 2 of them after the
point. `$(X,W)` prints X in hexadecimal the same way.

## Example
```text
PRINT "A=";5,0(7,-3);" ";$(255,4)
A=5	007   FF
PRINT 0(1234,205)
 12.34
```

*/
