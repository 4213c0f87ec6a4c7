use crate::resolver::{compute_route, resolve_query, SearchMode, SearchQuery};
use log::debug;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModeToggleProps {
    pub mode: SearchMode,
    pub on_change: Callback<SearchMode>,
}

#[function_component(ModeToggle)]
pub fn mode_toggle(props: &ModeToggleProps) -> Html {
    html! {
        <div class="flex justify-center gap-2 mb-3">
            { for [SearchMode::Video, SearchMode::Channel].into_iter().map(|mode| {
                let on_change = props.on_change.clone();
                let class = if mode == props.mode {
                    "px-4 py-1 rounded-full text-sm bg-blue-600 text-white"
                } else {
                    "px-4 py-1 rounded-full text-sm bg-gray-200 text-gray-700 hover:bg-gray-300"
                };
                html! {
                    <button type="button" class={class} onclick={move |_| on_change.emit(mode)}>
                        { mode.display_name() }
                    </button>
                }
            })}
        </div>
    }
}

#[function_component(SearchBar)]
pub fn search_bar() -> Html {
    let navigator = use_navigator();
    let current_input = use_state(String::new);
    let mode = use_state(SearchMode::default);

    let on_input = {
        let current_input = current_input.clone();
        Callback::from(move |e: InputEvent| {
            let input_value = e.target_unchecked_into::<HtmlInputElement>().value();
            current_input.set(input_value);
        })
    };

    let on_mode_change = {
        let mode = mode.clone();
        Callback::from(move |new_mode: SearchMode| mode.set(new_mode))
    };

    let on_submit = {
        let current_input = current_input.clone();
        let mode = mode.clone();

        Callback::from(move |e: web_sys::SubmitEvent| {
            e.prevent_default(); // Prevent default form submission (page reload)

            let query = SearchQuery::new(*mode, (*current_input).clone());
            let Some(target) = resolve_query(&query) else {
                return;
            };

            let route = compute_route(&target);
            debug!("Resolved {query:?} to {target:?}");
            if let Some(navigator) = &navigator {
                navigator.push(&route);
            }
        })
    };

    html! {
        <div class="w-full max-w-2xl">
            <ModeToggle mode={*mode} on_change={on_mode_change} />
            <form onsubmit={on_submit} class="flex">
                <input
                    type="text"
                    class="flex-grow p-3 border border-gray-300 rounded-l-lg focus:outline-none focus:ring-2 focus:ring-blue-500"
                    placeholder={mode.placeholder()}
                    value={(*current_input).clone()}
                    oninput={on_input}
                />
                <button
                    type="submit"
                    class="bg-blue-600 text-white p-3 rounded-r-lg hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-blue-500"
                >
                    {"Analyze"}
                </button>
            </form>
        </div>
    }
}
