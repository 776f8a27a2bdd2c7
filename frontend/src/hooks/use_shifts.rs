use shared::{merge_updated_shift, Shift};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::{SHIFT_WINDOW_END, SHIFT_WINDOW_START};
use crate::services::api::{ApiClient, ApiError};
use crate::services::logging::Logger;

pub const UPDATE_FAILED_MESSAGE: &str = "근무 변경에 실패했습니다.";

/// Local copy of the backend's shifts
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShiftList {
    pub shifts: Vec<Shift>,
    pub loaded: bool,
}

pub enum ShiftListAction {
    Loaded(Vec<Shift>),
    /// The fetch gave up; show the grid with whatever is known
    FetchFailed,
    /// Server-confirmed update for one date
    Updated { date: String, shift: Shift },
}

impl Reducible for ShiftList {
    type Action = ShiftListAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ShiftListAction::Loaded(shifts) => Rc::new(ShiftList {
                shifts,
                loaded: true,
            }),
            ShiftListAction::FetchFailed => Rc::new(ShiftList {
                shifts: self.shifts.clone(),
                loaded: true,
            }),
            ShiftListAction::Updated { date, shift } => Rc::new(ShiftList {
                shifts: merge_updated_shift(&self.shifts, &date, &shift),
                loaded: self.loaded,
            }),
        }
    }
}

pub struct UseShiftsResult {
    pub shifts: Vec<Shift>,
    pub loaded: bool,
    pub actions: UseShiftsActions,
}

#[derive(Clone)]
pub struct UseShiftsActions {
    /// `(work_type, date)` as produced by the edit dialog
    pub edit_shift: Callback<(String, String)>,
}

/// Shift list fetched once on mount; edits are merged only after the server
/// confirms them. `on_unauthorized` fires when a request hit a 401.
#[hook]
pub fn use_shifts(api_client: &ApiClient, on_unauthorized: Callback<()>) -> UseShiftsResult {
    let list = use_reducer(ShiftList::default);

    {
        let api_client = api_client.clone();
        let list = list.clone();
        let on_unauthorized = on_unauthorized.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match api_client.get_shifts(SHIFT_WINDOW_START, SHIFT_WINDOW_END).await {
                    Ok(shifts) => {
                        Logger::debug_with_component(
                            "use_shifts",
                            &format!("Loaded {} shifts", shifts.len()),
                        );
                        list.dispatch(ShiftListAction::Loaded(shifts));
                    }
                    Err(ApiError::Unauthorized) => {
                        Logger::warn_with_component("use_shifts", "Shift fetch unauthorized");
                        list.dispatch(ShiftListAction::FetchFailed);
                        on_unauthorized.emit(());
                    }
                    Err(e) => {
                        Logger::error_with_component(
                            "use_shifts",
                            &format!("Failed to fetch shifts: {}", e),
                        );
                        list.dispatch(ShiftListAction::FetchFailed);
                    }
                }
            });
            || ()
        });
    }

    let edit_shift = {
        let api_client = api_client.clone();
        let list = list.clone();
        use_callback((), move |(work_type, date): (String, String), _| {
            let api_client = api_client.clone();
            let list = list.clone();
            let on_unauthorized = on_unauthorized.clone();
            spawn_local(async move {
                match api_client.update_shift(&date, &work_type).await {
                    Ok(shift) => {
                        Logger::info_with_component(
                            "use_shifts",
                            &format!("Shift {} changed to {}", date, work_type),
                        );
                        list.dispatch(ShiftListAction::Updated { date, shift });
                    }
                    Err(e) => {
                        Logger::error_with_component(
                            "use_shifts",
                            &format!("Failed to update shift {}: {}", date, e),
                        );
                        if e == ApiError::Unauthorized {
                            on_unauthorized.emit(());
                        }
                        gloo::dialogs::alert(UPDATE_FAILED_MESSAGE);
                    }
                }
            });
        })
    };

    UseShiftsResult {
        shifts: list.shifts.clone(),
        loaded: list.loaded,
        actions: UseShiftsActions { edit_shift },
    }
}
