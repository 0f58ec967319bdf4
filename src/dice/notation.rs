use nom::{
    IResult, Parser,
    character::complete::{char, digit1},
    combinator::{all_consuming, map_res, opt},
    sequence::preceded,
};
use serde::{Deserialize, Serialize};

use crate::{
    dice::Die,
    error::{Error, Result},
};

/// A batch of identical fair dice in `NdS` notation: `"3d6"` is three
/// six-siders, `"d20"` is one twenty-sider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceSpec {
    pub count: u32,
    pub sides: u32,
}

impl DiceSpec {
    pub fn build(&self) -> Result<Vec<Die>> {
        (0..self.count)
            .map(|_| Die::fair(i64::from(self.sides)))
            .collect()
    }
}

impl std::str::FromStr for DiceSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_dice(s)
    }
}

pub fn parse_dice(input: &str) -> Result<DiceSpec> {
    let res = all_consuming(dice_spec).parse(input.trim());

    match res {
        Ok((_, spec)) if spec.count > 0 && spec.sides > 0 => Ok(spec),
        _ => Err(Error::InvalidNotation(input.to_string())),
    }
}

fn dice_spec(input: &str) -> IResult<&str, DiceSpec> {
    let (input, (count, sides)) = (
        opt(map_res(digit1, |s: &str| s.parse::<u32>())),
        preceded(char('d'), map_res(digit1, |s: &str| s.parse::<u32>())),
    )
        .parse(input)?;

    Ok((
        input,
        DiceSpec {
            count: count.unwrap_or(1),
            sides,
        },
    ))
}
