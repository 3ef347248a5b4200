use yew::prelude::*;
use yew_router::prelude::*;
use shared::{get_image_url, PictureFileName, PictureType};
use crate::{Route, styles::*};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub picture_type: String,
    pub date: String,
    pub filename: String,
}

#[function_component(PictureView)]
pub fn picture_view(props: &Props) -> Html {
    let load_failed = use_state(|| false);

    // Read on every render so a changed base URL shows up immediately.
    let src = get_image_url(&props.picture_type, &props.date, &props.filename);

    {
        let load_failed = load_failed.clone();
        use_effect_with_deps(move |_| {
            load_failed.set(false);
            || ()
        }, src.clone());
    }

    let onerror = {
        let load_failed = load_failed.clone();
        let src = src.clone();
        Callback::from(move |_: Event| {
            web_sys::console::warn_1(&format!("failed to load {}", src).into());
            load_failed.set(true);
        })
    };

    let type_label = props.picture_type.parse::<PictureType>()
        .map(|ty| ty.label().to_string())
        .unwrap_or_else(|_| props.picture_type.clone());

    let details = match PictureFileName::parse(&props.filename) {
        Ok(name) => html! {
            <p class={TEXT_MUTED}>
                {format!("Ticket {} · camera {} · shot {}", name.ticket_number, name.camera_number, name.sequence)}
            </p>
        },
        Err(_) => html! {},
    };

    html! {
        <div class={CONTAINER}>
            <div class={combine_classes(FLEX_BETWEEN, "mb-4")}>
                <h2 class={HEADING_SM}>{format!("{} · {}", type_label, props.date)}</h2>
                <Link<Route> to={Route::Home} classes={classes!(button_primary())}>{"Back"}</Link<Route>>
            </div>
            {details}
            <div class={combine_classes(CARD_SECTION, "mb-4")}>
                <p class={TEXT_URL}>{src.clone()}</p>
            </div>
            if *load_failed {
                <div class={alert_style("error")}>{"Could not load the picture from this URL."}</div>
            } else {
                <img class={IMAGE_FRAME} src={src} alt={props.filename.clone()} {onerror} />
            }
        </div>
    }
}
