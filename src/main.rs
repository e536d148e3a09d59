use gloo::console;
use yew::prelude::*;

use woodnuts_core::{
    bolt_ids, bolt_position, draw_order, plank_rect, Game, GridPos, BOLT_GRID, STARTER_HOLES,
};

const CELL: f32 = 32.0;
const BOLT_RADIUS: f32 = 9.0;
const GRID_COLS: usize = 3;
const PLANK_INSET: f32 = 4.0;
const PLANK_CORNER: f32 = 6.0;

fn fmt_f32(value: f32) -> String {
    format!("{:.2}", value)
}

fn board_width() -> f32 {
    GRID_COLS as f32 * CELL
}

fn board_height() -> f32 {
    BOLT_GRID.len() as f32 * CELL
}

fn view_box() -> String {
    format!("0 0 {} {}", fmt_f32(board_width()), fmt_f32(board_height()))
}

fn bolt_center(pos: GridPos) -> (f32, f32) {
    (
        (pos.col as f32 + 0.5) * CELL,
        (pos.row as f32 + 0.5) * CELL,
    )
}

fn bolt_class(removed: bool, removable: bool) -> &'static str {
    if removed {
        "bolt bolt-removed"
    } else if removable {
        "bolt bolt-free"
    } else {
        "bolt bolt-locked"
    }
}

fn plank_class(fallen: bool, dropping: bool) -> &'static str {
    if fallen {
        "plank plank-fallen"
    } else if dropping {
        "plank plank-dropping"
    } else {
        "plank"
    }
}

fn set_document_title(solved: bool) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    document.set_title(if solved {
        "Wood Nuts - solved"
    } else {
        "Wood Nuts"
    });
}

#[function_component(App)]
fn app() -> Html {
    let game = use_state(Game::new);
    let solved = game.is_solved();

    use_effect_with(solved, move |&solved| {
        set_document_title(solved);
        || ()
    });

    let on_reset = {
        let game = game.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*game).clone();
            next.reset();
            console::log!("session reset");
            game.set(next);
        })
    };

    let bolt_nodes: Html = bolt_ids()
        .map(|bolt| {
            let Some(pos) = bolt_position(bolt) else {
                return html! {};
            };
            let (cx, cy) = bolt_center(pos);
            let removed = game.is_removed(bolt);
            let removable = !removed && game.can_remove(bolt);
            let onclick = {
                let game = game.clone();
                Callback::from(move |_: MouseEvent| {
                    let mut next = (*game).clone();
                    if next.remove_bolt(bolt) {
                        console::log!(format!("removed {bolt}"));
                        game.set(next);
                    }
                })
            };
            html! {
                <circle
                    key={bolt}
                    class={bolt_class(removed, removable)}
                    cx={fmt_f32(cx)}
                    cy={fmt_f32(cy)}
                    r={fmt_f32(BOLT_RADIUS)}
                    onclick={onclick}
                />
            }
        })
        .collect();

    let order = draw_order(game.planks());
    let plank_nodes: Html = order
        .into_iter()
        .map(|idx| {
            let plank = game.planks()[idx];
            let Some(rect) = plank_rect(&plank) else {
                return html! {};
            };
            let x = rect.min_col as f32 * CELL + PLANK_INSET;
            let y = rect.min_row as f32 * CELL + PLANK_INSET;
            let width = rect.cols() as f32 * CELL - PLANK_INSET * 2.0;
            let height = rect.rows() as f32 * CELL - PLANK_INSET * 2.0;
            let fallen = game.is_fallen(&plank);
            let dropping = game.is_dropping(&plank);
            html! {
                <rect
                    key={plank.id}
                    class={plank_class(fallen, dropping)}
                    x={fmt_f32(x)}
                    y={fmt_f32(y)}
                    width={fmt_f32(width)}
                    height={fmt_f32(height)}
                    rx={fmt_f32(PLANK_CORNER)}
                    fill={plank.color}
                />
            }
        })
        .collect();

    let hole_nodes: Html = STARTER_HOLES
        .iter()
        .map(|id| {
            html! { <span key={*id} class="hole">{ *id }</span> }
        })
        .collect();

    let step_items: Html = game
        .steps()
        .iter()
        .map(|step| {
            html! { <li>{ step.clone() }</li> }
        })
        .collect();

    let status_label = if solved { "Solved" } else { "In progress" };
    let status_class = if solved {
        "status status-solved"
    } else {
        "status"
    };
    let solved_banner = if solved {
        html! { <div class="solved-banner">{ "Success!" }</div> }
    } else {
        html! {}
    };

    html! {
        <main class="app">
            <h1>{ "Wood Nuts Simulator" }</h1>
            <div class="starter-holes">{hole_nodes}</div>
            <svg
                class="board"
                viewBox={view_box()}
                width={fmt_f32(board_width())}
                height={fmt_f32(board_height())}
                preserveAspectRatio="xMidYMid meet"
            >
                {bolt_nodes}
                {plank_nodes}
            </svg>
            <div class="actions">
                <button class="reset" type="button" onclick={on_reset}>{ "Reset" }</button>
                <p class={status_class}>{ status_label }</p>
            </div>
            {solved_banner}
            <section class="steps">
                <h2>{ "Steps" }</h2>
                <ul>{step_items}</ul>
            </section>
        </main>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
