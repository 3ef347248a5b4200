use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use time::OffsetDateTime;
use shared::{format_picture_date, get_image_url, parse_picture_date, PictureFileName, PictureType};
use crate::{Route, config::CONFIG, styles::*};

#[function_component]
pub fn PictureForm() -> Html {
    let picture_type = use_state(|| CONFIG.default_picture_type);
    let date = use_state(|| format_picture_date(OffsetDateTime::now_utc().date()));
    let filename = use_state(|| PictureFileName::new("1", 1, 1).with_extension(CONFIG.default_extension));
    let navigator = use_navigator();

    let on_type_change = {
        let picture_type = picture_type.clone();
        Callback::from(move |e: Event| {
            let target = e.target_unchecked_into::<HtmlSelectElement>();
            if let Ok(ty) = target.value().parse::<PictureType>() {
                picture_type.set(ty);
            }
        })
    };

    let on_date_input = {
        let date = date.clone();
        Callback::from(move |e: InputEvent| {
            date.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_filename_input = {
        let filename = filename.clone();
        Callback::from(move |e: InputEvent| {
            filename.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let onsubmit = {
        let picture_type = picture_type.clone();
        let date = date.clone();
        let filename = filename.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Some(navigator) = &navigator {
                navigator.push(&Route::View {
                    picture_type: picture_type.code().to_string(),
                    date: (*date).clone(),
                    filename: (*filename).clone(),
                });
            }
        })
    };

    // Segments are never rejected, only flagged.
    let mut warnings = Vec::new();
    if let Err(e) = parse_picture_date(&date) {
        warnings.push(e.to_string());
    }
    if let Err(e) = PictureFileName::parse(&filename) {
        warnings.push(e.to_string());
    }

    let preview_url = get_image_url(*picture_type, &*date, &*filename);

    html! {
        <div class={CONTAINER}>
            <h1 class={HEADING_LG}>{CONFIG.app_title}</h1>
            <form class={SPACE_Y_LG} {onsubmit}>
                <div class={INPUT_GROUP}>
                    <label class={TEXT_LABEL}>{"Picture type"}</label>
                    <select id="picture-type" class={INPUT_BASE} onchange={on_type_change}>
                        { for PictureType::ALL.iter().map(|ty| html! {
                            <option value={ty.code()} selected={*ty == *picture_type}>
                                {format!("{} ({})", ty.code(), ty.label())}
                            </option>
                        }) }
                    </select>
                </div>

                <div class={INPUT_GROUP}>
                    <label class={TEXT_LABEL}>{"Date"}</label>
                    <input id="picture-date" type="date" class={INPUT_BASE}
                        value={(*date).clone()} oninput={on_date_input} />
                </div>

                <div class={INPUT_GROUP}>
                    <label class={TEXT_LABEL}>{"File name"}</label>
                    <input id="picture-filename" type="text" class={INPUT_BASE}
                        value={(*filename).clone()} oninput={on_filename_input} />
                    <span class={TEXT_MUTED}>{"[ticket]-CMR[camera]_[sequence].ext"}</span>
                </div>

                { for warnings.iter().map(|w| html! { <div class={alert_style("warning")}>{w.clone()}</div> }) }

                <div class={CARD_SECTION}>
                    <span class={TEXT_LABEL}>{"Image URL"}</span>
                    <p class={TEXT_URL}>{preview_url}</p>
                </div>

                <button type="submit" class={button_primary()}>{"View picture"}</button>
            </form>
        </div>
    }
}
