use crate::utils::Modal;
use tictactoe_core as game;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct ControlsProps {
    pub on_new_game: Callback<MouseEvent>,
    pub on_reset_stats: Callback<MouseEvent>,
}

#[function_component(ControlsCard)]
pub(crate) fn controls_card(props: &ControlsProps) -> Html {
    html! {
        <article class="card controls">
            <h2>{"🔥 Game Controls"}</h2>
            <button class="new-game" onclick={props.on_new_game.clone()}>{"New Game"}</button>
            <button class="reset-stats" onclick={props.on_reset_stats.clone()}>{"Reset All Stats"}</button>
        </article>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct StatsProps {
    pub tally: game::SessionTally,
}

#[function_component(StatsCard)]
pub(crate) fn stats_card(props: &StatsProps) -> Html {
    let tally = props.tally;
    let row = |label: &'static str, class: &'static str, count: u32| {
        html! {
            <li>
                <span>{label}</span>
                <span class={classes!("badge", class)}>{count.to_string()}</span>
            </li>
        }
    };

    html! {
        <article class="card stats">
            <h2>{"😊 Statistics"}</h2>
            <ul>
                {row("Player X Wins:", "mark-x", tally.x_wins())}
                {row("Player O Wins:", "mark-o", tally.o_wins())}
                {row("Draws:", "secondary", tally.draws())}
            </ul>
            <footer>
                <span>{"Total Games:"}</span>
                <span class="badge outline">{tally.total().to_string()}</span>
            </footer>
        </article>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct PlayersProps {
    pub turn: game::Player,
    pub in_progress: bool,
}

#[function_component(PlayersCard)]
pub(crate) fn players_card(props: &PlayersProps) -> Html {
    let PlayersProps { turn, in_progress } = props.clone();

    html! {
        <article class="card players">
            <h2>{"Players"}</h2>
            {
                for [game::Player::X, game::Player::O].into_iter().map(|player| {
                    let current = in_progress && player == turn;
                    html! {
                        <div class={classes!("player", mark_class(player), current.then_some("current"))}>
                            <span class="avatar">{player.symbol()}</span>
                            <span>{format!("Player {}", player)}</span>
                            if current {
                                <span class="badge">{"Current"}</span>
                            }
                        </div>
                    }
                })
            }
        </article>
    }
}

pub(crate) const fn mark_class(player: game::Player) -> &'static str {
    match player {
        game::Player::X => "mark-x",
        game::Player::O => "mark-o",
    }
}

/// Icon, title and message of the end-of-game dialog.
pub(crate) fn outcome_text(outcome: game::Outcome) -> Option<(&'static str, String, String)> {
    match outcome {
        game::Outcome::InProgress => None,
        game::Outcome::Win { player, .. } => Some((
            "🏆",
            format!("Player {} Wins!", player),
            format!("Congratulations! Player {} has won this round.", player),
        )),
        game::Outcome::Draw => Some((
            "🤝",
            "It's a Draw!".to_string(),
            "Great game! Both players played well.".to_string(),
        )),
    }
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct OutcomeDialogProps {
    pub open: bool,
    pub outcome: game::Outcome,
    pub on_close: Callback<MouseEvent>,
    pub on_play_again: Callback<MouseEvent>,
}

#[function_component(OutcomeDialog)]
pub(crate) fn outcome_dialog(props: &OutcomeDialogProps) -> Html {
    if !props.open {
        return html! {};
    }
    let Some((icon, title, message)) = outcome_text(props.outcome) else {
        return html! {};
    };

    html! {
        <Modal>
            <div class="backdrop">
                <dialog id="outcome" open={true}>
                    <header>
                        <div class="trophy">{icon}</div>
                        <h2>{title}</h2>
                        <p>{message}</p>
                    </header>
                    <footer>
                        <button class="outline" onclick={props.on_close.clone()}>{"Close"}</button>
                        <button class="play-again" onclick={props.on_play_again.clone()}>{"↻ Play Again"}</button>
                    </footer>
                </dialog>
            </div>
        </Modal>
    }
}
