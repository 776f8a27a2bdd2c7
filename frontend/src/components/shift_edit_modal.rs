use shared::{Shift, ShiftEditForm, WorkType};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ShiftEditModalProps {
    pub shift: Shift,
    /// Receives `(work_type, date)` for a confirmed change
    pub on_submit: Callback<(String, String)>,
    pub on_close: Callback<()>,
}

#[function_component(ShiftEditModal)]
pub fn shift_edit_modal(props: &ShiftEditModalProps) -> Html {
    let form = use_state(|| ShiftEditForm::open_for(&props.shift));

    let on_submit = {
        let form = form.clone();
        let on_submit = props.on_submit.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*form).clone();
            if let Some(change) = next.submit() {
                on_submit.emit(change);
            }
            form.set(next);
            on_close.emit(());
        })
    };

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let type_buttons = WorkType::ALL.iter().map(|work_type| {
        let code = work_type.code();
        let selected = form.selected.as_deref() == Some(code);
        let onclick = {
            let form = form.clone();
            Callback::from(move |_: MouseEvent| {
                let mut next = (*form).clone();
                next.select(code);
                form.set(next);
            })
        };
        let style = format!(
            "background-color: {}; color: {};",
            work_type.color(),
            work_type.text_color()
        );

        html! {
            <button
                key={code}
                type="button"
                class={classes!("work-type-option", selected.then_some("selected"))}
                {style}
                {onclick}
            >
                {code}
            </button>
        }
    });

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal shift-edit-modal" onclick={on_modal_click}>
                <div class="modal-header">
                    <h3 class="modal-title">{&form.date}</h3>
                    <p class="shift-original">{format!("본근무 : {}", form.work_type)}</p>
                    {if form.is_changed() {
                        html! {
                            <p class="shift-changed">
                                <span class="changed-marker"></span>
                                {format!("변경근무 : {}", form.effective_work_type())}
                            </p>
                        }
                    } else {
                        html! {}
                    }}
                </div>
                <div class="work-type-options">
                    {for type_buttons}
                </div>
                <div class="modal-buttons">
                    <button
                        type="button"
                        class="btn btn-primary"
                        disabled={!form.can_submit()}
                        onclick={on_submit}
                    >
                        {"변경"}
                    </button>
                </div>
            </div>
        </div>
    }
}
