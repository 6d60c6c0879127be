pub struct Human;

impl Actor for Human {
    fn decide(&self, player: &Player, _: Points) -> Decision {
        Input::new()
            .with_prompt(format!("{}, roll (r) or hold (h)?", player.name()))
            .report(false)
            .validate_with(|i: &String| -> Result<(), &str> {
                Decision::try_from(i.as_str()).map(|_| ())
            })
            .interact()
            .map(|i: String| Decision::try_from(i.as_str()))
            .expect("well behaved terminal")
            .expect("validated on entry")
    }
}

impl Debug for Human {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Human")
    }
}

use crate::gameplay::{Points, actor::Actor, decision::Decision, player::Player};
use dialoguer::Input;
use std::fmt::{Debug, Formatter};
use std::result::Result;
