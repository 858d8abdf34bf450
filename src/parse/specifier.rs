use winnow::{
    ascii::{digit1, multispace0},
    combinator::{alt, cut_err, opt, preceded, terminated},
    error::{
        StrContext::{Expected, Label},
        StrContextValue::{CharLiteral, Description},
    },
    token::one_of,
    PResult, Parser,
};

use super::{Specifier, MAX_QUANTITY};
use crate::dice::DieType;

// roll := ws quantity ws "d" ws sides ws modifier? ws
pub(super) fn specifier(input: &mut &str) -> PResult<Specifier> {
    terminated(
        (
            preceded(multispace0, quantity),
            preceded(multispace0, separator),
            preceded(multispace0, die_sides),
            preceded(multispace0, opt(modifier)),
        ),
        multispace0,
    )
    .map(|(quantity, _, sides, modifier)| Specifier {
        quantity,
        sides,
        modifier: modifier.unwrap_or(0),
    })
    .context(Label("roll specifier"))
    .parse_next(input)
}

fn quantity(input: &mut &str) -> PResult<u32> {
    digit1
        .try_map(|digits: &str| digits.parse::<u32>())
        .verify(|quantity: &u32| *quantity <= MAX_QUANTITY)
        .context(Label("dice quantity"))
        .context(Expected(Description("a number of dice from 0 to 999")))
        .parse_next(input)
}

fn separator(input: &mut &str) -> PResult<char> {
    one_of(['d', 'D'])
        .context(Label("d"))
        .context(Expected(CharLiteral('d')))
        .parse_next(input)
}

fn die_sides(input: &mut &str) -> PResult<DieType> {
    // Two digit faces first so `20` is not read as a `2` followed by junk.
    alt((
        "20".value(DieType::D20),
        "12".value(DieType::D12),
        "10".value(DieType::D10),
        "2".value(DieType::D2),
        "4".value(DieType::D4),
        "6".value(DieType::D6),
        "8".value(DieType::D8),
    ))
    .context(Label("die sides"))
    .context(Expected(Description("one of 2, 4, 6, 8, 10, 12 or 20")))
    .parse_next(input)
}

fn modifier(input: &mut &str) -> PResult<i32> {
    (
        alt(('+'.value(1i64), '-'.value(-1i64))),
        cut_err(preceded(multispace0, modifier_amount)),
    )
        .try_map(|(sign, amount)| i32::try_from(sign * amount))
        .context(Label("modifier"))
        .parse_next(input)
}

fn modifier_amount(input: &mut &str) -> PResult<i64> {
    digit1
        .try_map(|digits: &str| digits.parse::<i64>())
        .context(Expected(Description("a whole number after the sign")))
        .parse_next(input)
}
