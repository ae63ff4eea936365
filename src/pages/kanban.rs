//! Project Kanban board page.
//!
//! Renders the three-column model from [`crate::state::board`] with
//! move controls on each card.

use leptos::prelude::*;

use crate::components::protected::Protected;
use crate::state::board::{BoardState, Column};

#[component]
pub fn KanbanPage() -> impl IntoView {
    view! {
        <Protected>
            <Board/>
        </Protected>
    }
}

#[component]
fn Board() -> impl IntoView {
    let board = RwSignal::new(BoardState::seed());

    let shift = move |from: Column, index: usize, to: Column| {
        board.update(|b| {
            let end = b.column(to).len();
            b.move_task(from, index, to, end);
        });
    };

    let column_view = move |column: Column| {
        view! {
            <div class="kanban-column">
                <h2 class="kanban-column__title">{column.title()}</h2>
                <div class="kanban-column__cards">
                    {move || {
                        board
                            .get()
                            .column(column)
                            .iter()
                            .enumerate()
                            .map(|(index, card)| {
                                let left = column.previous();
                                let right = column.next();
                                view! {
                                    <div class=format!("kanban-card {}", card.priority.css_class())>
                                        <span class="kanban-card__content">
                                            {card.content.clone()}
                                        </span>
                                        <span class="kanban-card__priority">
                                            {card.priority.label()}
                                        </span>
                                        <div class="kanban-card__actions">
                                            {left
                                                .map(|target| {
                                                    view! {
                                                        <button
                                                            class="kanban-card__move"
                                                            title=format!("Move to {}", target.title())
                                                            on:click=move |_| shift(column, index, target)
                                                        >
                                                            "\u{25c0}"
                                                        </button>
                                                    }
                                                })}
                                            {right
                                                .map(|target| {
                                                    view! {
                                                        <button
                                                            class="kanban-card__move"
                                                            title=format!("Move to {}", target.title())
                                                            on:click=move |_| shift(column, index, target)
                                                        >
                                                            "\u{25b6}"
                                                        </button>
                                                    }
                                                })}
                                        </div>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </div>
        }
    };

    view! {
        <div class="kanban-container">
            <h1>"Project Kanban Board"</h1>
            <p class="kanban-info">"Move tasks between columns to update their status."</p>
            <div class="kanban-board">
                {Column::ALL.into_iter().map(column_view).collect::<Vec<_>>()}
            </div>
        </div>
    }
}
