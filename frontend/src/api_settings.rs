use yew::prelude::*;
use web_sys::HtmlInputElement;
use shared::{config, check_base_url, DEFAULT_API_BASE_URL};
use crate::styles::*;

/// Lets the user point the client at another backend deployment.
#[function_component(ApiSettings)]
pub fn api_settings() -> Html {
    let current = use_state(config::api_base_url);
    let input_value = use_state(config::api_base_url);

    let oninput = {
        let input_value = input_value.clone();
        Callback::from(move |e: InputEvent| {
            let target = e.target_unchecked_into::<HtmlInputElement>();
            input_value.set(target.value());
        })
    };

    let onsubmit = {
        let current = current.clone();
        let input_value = input_value.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            config::set_api_base_url((*input_value).clone());
            web_sys::console::log_1(&format!("apiBaseUrl = {}", config::api_base_url()).into());
            current.set(config::api_base_url());
        })
    };

    let onreset = {
        let current = current.clone();
        let input_value = input_value.clone();
        Callback::from(move |_: MouseEvent| {
            config::reset();
            current.set(config::api_base_url());
            input_value.set(config::api_base_url());
        })
    };

    let issues = check_base_url(&input_value);

    html! {
        <div class={CONTAINER}>
            <h1 class={HEADING_LG}>{"API Settings"}</h1>
            <div class={combine_classes(CARD_SECTION, "mb-6")}>
                <span class={TEXT_LABEL}>{"Current base URL"}</span>
                <p class={TEXT_URL}>{(*current).clone()}</p>
                <p class={TEXT_MUTED}>{format!("Default: {}", DEFAULT_API_BASE_URL)}</p>
            </div>

            <form class={SPACE_Y_LG} {onsubmit}>
                <div class={INPUT_GROUP}>
                    <label class={TEXT_LABEL}>{"New base URL"}</label>
                    <input
                        id="api-base-url"
                        type="text"
                        class={INPUT_BASE}
                        value={(*input_value).clone()}
                        {oninput}
                    />
                </div>

                { for issues.iter().map(|issue| html! {
                    <div class={alert_style("warning")}>{issue.to_string()}</div>
                }) }

                <div class={FLEX_BETWEEN}>
                    <button type="submit" class={button_primary()}>{"Apply"}</button>
                    <button type="button" class={button_warning()} onclick={onreset}>{"Reset to default"}</button>
                </div>
            </form>
        </div>
    }
}
