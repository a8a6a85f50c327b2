use crate::conversion::to_fahrenheit;
use crate::ui::mvi::Reducer;
use crate::ui::single_field::intent::SingleFieldIntent;
use crate::ui::single_field::state::SingleFieldState;

pub struct SingleFieldReducer;

impl Reducer for SingleFieldReducer {
    type State = SingleFieldState;
    type Intent = SingleFieldIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SingleFieldIntent::InputChanged(input) => {
                let output = to_fahrenheit(&input);
                SingleFieldState { input, output }
            }
        }
    }
}
