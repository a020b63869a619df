// SPDX-License-Identifier: MPL-2.0
//! Browser scheduler backed by `setTimeout` / `clearTimeout`.

use super::timers::TimerTable;
use crate::application::port::{Scheduler, TaskId};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// Callback receiving fired tasks.
pub type Dispatch<T> = Rc<dyn Fn(TaskId, T)>;

type Timers = RefCell<TimerTable<Closure<dyn FnMut()>>>;

/// Schedules tasks on the window's timer queue.
///
/// Fired tasks are handed to `dispatch`, which routes them back to the
/// owning controller. Each timer's closure is owned here next to its handle
/// and dropped when the timer is cleared or has fired, so cancelled tasks do
/// not leak.
pub struct TimeoutScheduler<T> {
    window: Window,
    dispatch: Dispatch<T>,
    timers: Rc<Timers>,
}

impl<T> std::fmt::Debug for TimeoutScheduler<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimeoutScheduler")
            .field("pending", &self.timers.borrow().len())
            .finish_non_exhaustive()
    }
}

impl<T: 'static> TimeoutScheduler<T> {
    pub fn new(window: Window, dispatch: Dispatch<T>) -> Self {
        Self {
            window,
            dispatch,
            timers: Rc::new(RefCell::new(TimerTable::new())),
        }
    }

    /// Number of timers not yet fired or cancelled.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.timers.borrow().len()
    }

    fn callback(&self, id: TaskId, task: T) -> Closure<dyn FnMut()> {
        let timers: Weak<Timers> = Rc::downgrade(&self.timers);
        let dispatch = Rc::clone(&self.dispatch);
        let mut task = Some(task);
        Closure::<dyn FnMut()>::new(move || {
            let (Some(task), Some(timers)) = (task.take(), timers.upgrade()) else {
                return;
            };
            if !timers.borrow_mut().fire(id) {
                return;
            }
            dispatch(id, task);
            timers.borrow_mut().finish();
        })
    }
}

impl<T: 'static> Scheduler<T> for TimeoutScheduler<T> {
    fn schedule(&mut self, delay: Duration, task: T) -> TaskId {
        let id = TaskId::new();
        self.timers.borrow_mut().sweep();
        let callback = self.callback(id, task);

        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        let armed = self.window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            millis,
        );
        match armed {
            Ok(handle) => self.timers.borrow_mut().insert(id, handle, callback),
            Err(err) => {
                tracing::warn!(%id, error = ?err, "setTimeout failed; task dropped");
            }
        }
        id
    }

    fn cancel(&mut self, id: TaskId) -> bool {
        let Some(handle) = self.timers.borrow_mut().cancel(id) else {
            return false;
        };
        self.window.clear_timeout_with_handle(handle);
        true
    }
}

impl<T> Drop for TimeoutScheduler<T> {
    fn drop(&mut self) {
        if let Ok(timers) = self.timers.try_borrow() {
            for handle in timers.handles() {
                self.window.clear_timeout_with_handle(handle);
            }
        }
    }
}
