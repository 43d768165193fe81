use crate::celebration::{self, Burst};
use crate::panels::*;
use crate::theme::Theme;
use crate::utils::*;
use clap::Args;
use gloo::timers::callback::Timeout;
use tictactoe_core as game;
use yew::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Play(usize),
    NewGame,
    ResetStats,
    CloseDialog,
    ToggleTheme,
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    index: usize,
    cell: game::Cell,
    #[prop_or_default]
    winning: bool,
    #[prop_or_default]
    locked: bool,
    callback: Callback<usize>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        index,
        cell,
        winning,
        locked,
        callback,
    } = props.clone();

    let class = classes!(
        "cell",
        cell.player().map(mark_class),
        winning.then_some("winning")
    );

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("cell {} clicked", index);
        callback.emit(index);
    });

    html! {
        <button {class} {onclick} disabled={locked}>
            {cell.player().map_or("", game::Player::symbol)}
        </button>
    }
}

/// Text of the status badge above the board.
///
/// The turn does not advance on the winning move, so after a win this still
/// names the winner.
fn status_message(snapshot: &game::Snapshot) -> String {
    match snapshot.outcome {
        game::Outcome::Draw => "It's a draw! 🤝".to_string(),
        _ => format!("Player {}'s turn", snapshot.turn),
    }
}

fn status_variant(outcome: game::Outcome) -> &'static str {
    use game::Outcome::*;
    match outcome {
        InProgress => "outline",
        Win { .. } => "default",
        Draw => "secondary",
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Delay between the winning move and the confetti, in milliseconds
    #[arg(long, default_value_t = 500)]
    pub(crate) celebration_delay: u32,

    /// Never throw confetti
    #[arg(long)]
    pub(crate) no_celebration: bool,
}

#[derive(Debug)]
pub(crate) struct GameView {
    engine: game::GameEngine,
    dialog_open: bool,
    theme: Option<Theme>,
    pending_celebration: Option<Timeout>,
}

impl GameView {
    fn play(&mut self, ctx: &Context<Self>, index: usize) -> bool {
        let outcome = match self.engine.attempt_move(index) {
            Ok(outcome) => outcome,
            Err(err) => {
                log::debug!("move on cell {} rejected: {}", index, err);
                return false;
            }
        };

        if outcome.ends_game() {
            self.dialog_open = true;
        }
        if outcome.celebrates() {
            self.celebrate(ctx.props());
        }

        outcome.has_update()
    }

    fn celebrate(&mut self, props: &GameProps) {
        if props.no_celebration {
            log::debug!("celebration disabled");
            return;
        }
        self.pending_celebration = Some(celebration::schedule(
            Burst::default(),
            props.celebration_delay,
        ));
    }

    fn new_game(&mut self) -> bool {
        self.engine.reset_board();
        self.dialog_open = false;
        // a confetti shot still waiting belongs to the previous game
        self.pending_celebration = None;
        true
    }

    fn toggle_theme(&mut self) -> bool {
        self.theme = Some(Theme::toggled(self.theme));
        Theme::apply(self.theme);
        true
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            engine: game::GameEngine::new(),
            dialog_open: false,
            theme: LocalOrDefault::local_or_default(),
            pending_celebration: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        log::trace!("msg: {:?}", msg);
        match msg {
            Play(index) => self.play(ctx, index),
            NewGame => self.new_game(),
            ResetStats => {
                self.engine.reset_tally();
                true
            }
            CloseDialog => std::mem::replace(&mut self.dialog_open, false),
            ToggleTheme => self.toggle_theme(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let snapshot = self.engine.snapshot();
        let cb_play = ctx.link().callback(Play);
        let cb_new_game = ctx.link().callback(|_: MouseEvent| NewGame);
        let cb_reset_stats = ctx.link().callback(|_: MouseEvent| ResetStats);
        let cb_close_dialog = ctx.link().callback(|_: MouseEvent| CloseDialog);
        let cb_toggle_theme = ctx.link().callback(|_: MouseEvent| ToggleTheme);

        html! {
            <div class="tictactoe">
                <header>
                    <hgroup>
                        <h1>{"Tic-Tac-Toe"}</h1>
                        <p>{"Classic strategy game for two players"}</p>
                    </hgroup>
                    <button class="theme-toggle" title="Toggle theme" onclick={cb_toggle_theme}>
                        {Theme::toggle_icon(self.theme)}
                    </button>
                </header>
                <main>
                    <section class="card board-card">
                        <span class={classes!("badge", status_variant(snapshot.outcome))}>
                            {status_message(&snapshot)}
                        </span>
                        <div class="board">
                            {
                                for snapshot.board.iter().map(|(index, cell)| html! {
                                    <CellView
                                        {index}
                                        {cell}
                                        winning={snapshot.outcome.is_on_winning_line(index)}
                                        locked={!self.engine.can_play_at(index)}
                                        callback={cb_play.clone()}
                                    />
                                })
                            }
                        </div>
                    </section>
                    <aside>
                        <ControlsCard on_new_game={cb_new_game.clone()} on_reset_stats={cb_reset_stats}/>
                        <StatsCard tally={snapshot.tally}/>
                        <PlayersCard turn={snapshot.turn} in_progress={snapshot.outcome.is_in_progress()}/>
                    </aside>
                </main>
                <OutcomeDialog
                    open={self.dialog_open}
                    outcome={snapshot.outcome}
                    on_close={cb_close_dialog}
                    on_play_again={cb_new_game}
                />
                <footer>{format!("© {} MADE BY VINCENT.", current_year())}</footer>
            </div>
        }
    }
}
