//! Object keys of the structured form.

pub const TEXT: &str = "text";
pub const TRANSLATE: &str = "translate";
pub const WITH: &str = "with";
pub const SCORE: &str = "score";
pub const SCORE_NAME: &str = "name";
pub const SCORE_OBJECTIVE: &str = "objective";
pub const SCORE_VALUE: &str = "value";
pub const SELECTOR: &str = "selector";
pub const KEYBIND: &str = "keybind";
pub const EXTRA: &str = "extra";

pub const COLOR: &str = "color";
pub const FONT: &str = "font";
pub const INSERTION: &str = "insertion";

pub const CLICK_EVENT: &str = "clickEvent";
pub const HOVER_EVENT: &str = "hoverEvent";
pub const ACTION: &str = "action";
pub const VALUE: &str = "value";
pub const CONTENTS: &str = "contents";

pub const ITEM_ID: &str = "id";
pub const ITEM_COUNT: &str = "count";
pub const ITEM_TAG: &str = "tag";
pub const ENTITY_TYPE: &str = "type";
pub const ENTITY_ID: &str = "id";
pub const ENTITY_NAME: &str = "name";
