use crate::conversion::{to_celsius, to_fahrenheit};
use crate::ui::mvi::Reducer;
use crate::ui::two_way::intent::TwoWayIntent;
use crate::ui::two_way::state::FieldPair;

pub struct TwoWayReducer;

impl Reducer for TwoWayReducer {
    type State = FieldPair;
    type Intent = TwoWayIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            TwoWayIntent::CelsiusEdited(celsius) => {
                let fahrenheit = to_fahrenheit(&celsius);
                FieldPair {
                    celsius,
                    fahrenheit,
                }
            }
            TwoWayIntent::FahrenheitEdited(fahrenheit) => {
                let celsius = to_celsius(&fahrenheit);
                FieldPair {
                    celsius,
                    fahrenheit,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn celsius_edit_derives_fahrenheit() {
        let pair = TwoWayReducer::reduce(
            FieldPair::default(),
            TwoWayIntent::CelsiusEdited("100".into()),
        );
        assert_eq!(pair.celsius, "100");
        assert_eq!(pair.fahrenheit, "212.0");
    }

    #[test]
    fn fahrenheit_edit_derives_celsius() {
        let pair = TwoWayReducer::reduce(
            FieldPair::default(),
            TwoWayIntent::FahrenheitEdited("212".into()),
        );
        assert_eq!(pair.fahrenheit, "212");
        assert_eq!(pair.celsius, "100.0");
    }
}
