/*!
# Instruction Set

A program is a string. Each character is one instruction and its
position in the string is its address. Characters that are not listed
below do nothing, so spaces and newlines can be used freely.

| char  | name             | stack before                 | stack after  |
|-------|------------------|------------------------------|--------------|
| `0-9` | push number      | `[]`                         | `[n]`        |
| `A-Z` | push symbol      | `[]`                         | `[S]`        |
| `{`   | block            | `[]`                         | `[block]`    |
| `}`   | return           | `[]`                         | `[]`         |
| `a`   | add              | `[a b]`                      | `[a+b]`      |
| `s`   | subtract         | `[a b]`                      | `[a-b]`      |
| `m`   | multiply         | `[a b]`                      | `[a*b]`      |
| `d`   | divide           | `[a b]`                      | `[a/b]`      |
| `f`   | define           | `[block name]`               | `[]`         |
| `j`   | jump             | `[target]`                   | `[]`         |
| `c`   | call             | `[name]`                     | `[]`         |
| `i`   | conditional call | `[cond if-true if-false]`    | `[]`         |
| `k`   | conditional jump | `[cond if-true if-false]`    | `[]`         |
| `r`   | record           | `[a]`                        | `[a]`        |
| `q`   | drop             | `[a]`                        | `[]`         |
| `w`   | duplicate        | `[a]`                        | `[a a]`      |
| `e`   | swap             | `[a b]`                      | `[b a]`      |
| `z`   | depth            | `[]`                         | `[depth]`    |
| `x`   | load             | `[index]`                    | `[value]`    |
| `y`   | store            | `[index value]`              | `[]`         |
| `t`   | exchange         | `[a]`                        | `[register]` |
| `h`   | halt             | `[]`                         | `[]`         |

## Blocks

`{` pushes a block holding its own address and skips to the matching
`}` without running anything in between. `f` names a block with a
symbol. `c` enters the named block and its closing `}` returns to the
instruction after the call. A `}` with nothing to return to ends the
program.

```text
{5r}Af Ac h
```

## Jumps

`j` with a symbol enters the named block without saving a return
address. With a number it moves that many positions from the `j`
itself, so `3j` lands three characters later. Negative offsets are
built with subtraction.

`i` and `k` choose their true branch for any nonzero condition. `i`
only takes symbols and calls them. `k` accepts a symbol or an offset
for each branch and jumps.

```text
3r1sw08s1k
```
prints `3 2 1`.

## Numbers

Numbers are signed 64-bit integers. `d` rounds toward negative
infinity, so `702sd` is `-4`. Dividing by zero and overflowing are
errors.

## The register

`t` swaps the top of the stack with a single register that starts at 0.

## Load and store

`x` and `y` address the stack from the bottom. An index equal to the
current depth is allowed: `y` appends, and `x` pushes an empty slot
that every other instruction rejects.

*/
