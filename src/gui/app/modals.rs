use crate::gui::{
    detail_modal::DetailModal,
    notice_modal::NoticeModal,
};

#[derive(Default)]
pub struct Modals {
    pub detail: DetailModal,
    pub notice: NoticeModal,
}
