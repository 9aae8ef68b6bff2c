use super::helpers::validate_range;
use crate::schema::TandemConfig;

pub(crate) fn validate_game(errors: &mut Vec<String>, config: &TandemConfig) {
    let game = &config.game;
    validate_range(
        errors,
        "game.start_countdown_secs",
        game.start_countdown_secs,
        1,
        600,
    );
    validate_range(
        errors,
        "game.time_to_speak_secs",
        game.time_to_speak_secs,
        1,
        7_200,
    );
    validate_range(
        errors,
        "game.swap_time_to_speak_secs",
        game.swap_time_to_speak_secs,
        1,
        600,
    );
}
