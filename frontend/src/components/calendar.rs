use shared::calendar::WEEKDAY_LABELS;
use shared::{CalendarDay, CalendarDayType, CalendarMonth, Shift, WorkType};
use yew::prelude::*;

use super::shift_edit_modal::ShiftEditModal;
use crate::services::logging::Logger;

pub const LOGIN_REQUIRED_MESSAGE: &str = "로그인이 필요합니다.";

#[derive(Properties, PartialEq)]
pub struct CalendarProps {
    pub month: Option<CalendarMonth>,
    /// Shifts are still being fetched
    pub loading: bool,
    pub logged_in: bool,
    pub on_prev_month: Callback<MouseEvent>,
    pub on_next_month: Callback<MouseEvent>,
    /// Receives `(work_type, date)` for each confirmed edit
    pub on_edit_shift: Callback<(String, String)>,
}

#[function_component(Calendar)]
pub fn calendar(props: &CalendarProps) -> Html {
    let editing = use_state(|| Option::<Shift>::None);

    let on_shift_click = {
        let editing = editing.clone();
        let logged_in = props.logged_in;
        Callback::from(move |shift: Shift| {
            if !logged_in {
                gloo::dialogs::alert(LOGIN_REQUIRED_MESSAGE);
                return;
            }
            Logger::debug_with_component("calendar", &format!("Editing shift {}", shift.date));
            editing.set(Some(shift));
        })
    };

    let on_close = {
        let editing = editing.clone();
        Callback::from(move |_: ()| editing.set(None))
    };

    let month = match &props.month {
        Some(month) if !props.loading => month,
        _ => {
            return html! {
                <div class="calendar-card">
                    <div class="calendar-loading">{"Loading..."}</div>
                </div>
            };
        }
    };

    html! {
        <div class="calendar-card">
            <div class="calendar-header">
                <button class="calendar-nav-btn" onclick={props.on_prev_month.clone()}>{"‹"}</button>
                <h2 class="calendar-title">{month.title()}</h2>
                <button class="calendar-nav-btn" onclick={props.on_next_month.clone()}>{"›"}</button>
            </div>
            <div class="calendar-grid">
                {for WEEKDAY_LABELS.iter().map(|label| html! {
                    <div class="calendar-day-header">{*label}</div>
                })}
                {for month.weeks().flat_map(|week| week.iter()).map(|day| {
                    render_day(day, &on_shift_click)
                })}
            </div>
            {if let Some(shift) = (*editing).clone() {
                html! {
                    <ShiftEditModal
                        key={shift.date.clone()}
                        shift={shift.clone()}
                        on_submit={props.on_edit_shift.clone()}
                        {on_close}
                    />
                }
            } else {
                html! {}
            }}
        </div>
    }
}

fn render_day(day: &CalendarDay, on_shift_click: &Callback<Shift>) -> Html {
    match day.day_type {
        CalendarDayType::PaddingBefore | CalendarDayType::PaddingAfter => html! {
            <div class="calendar-day padding"></div>
        },
        CalendarDayType::MonthDay => html! {
            <div class="calendar-day">
                <div class="day-number">{day.day}</div>
                {day.shift.as_ref().map(|shift| render_shift(shift, on_shift_click)).unwrap_or_default()}
            </div>
        },
    }
}

fn render_shift(shift: &Shift, on_shift_click: &Callback<Shift>) -> Html {
    let effective = shift.effective_work_type();
    let style = WorkType::from_code(effective)
        .map(|work_type| {
            format!(
                "background-color: {}; color: {};",
                work_type.color(),
                work_type.text_color()
            )
        })
        .unwrap_or_default();
    let label: String = effective.chars().take(1).collect();

    let onclick = {
        let shift = shift.clone();
        let on_shift_click = on_shift_click.clone();
        Callback::from(move |_: MouseEvent| on_shift_click.emit(shift.clone()))
    };

    html! {
        <div class="shift-entry" {style} {onclick}>
            <span class="shift-label">{label}</span>
            {if shift.is_changed() {
                html! { <span class="changed-marker"></span> }
            } else {
                html! {}
            }}
        </div>
    }
}
