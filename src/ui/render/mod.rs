mod all;
mod footer;
mod log;
mod widget;

use self::log::log;
use super::*;
use footer::footer;
use widget::widget;

pub use all::all as render;
