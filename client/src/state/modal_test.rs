use super::*;

#[test]
fn modal_starts_hidden() {
    assert_eq!(ModalVisibility::default(), ModalVisibility::Hidden);
    assert_eq!(ModalVisibility::default().display(), "none");
}

#[test]
fn open_then_close_toggles_indefinitely() {
    let mut modal = ModalVisibility::default();
    for _ in 0..3 {
        modal.open();
        assert!(modal.is_visible());
        assert_eq!(modal.display(), "block");
        modal.close();
        assert!(!modal.is_visible());
    }
}

#[test]
fn backdrop_click_closes_visible_modal() {
    let mut modal = ModalVisibility::Visible;
    assert!(modal.dismiss_from_backdrop());
    assert_eq!(modal, ModalVisibility::Hidden);
}

#[test]
fn backdrop_click_on_hidden_modal_is_noop() {
    let mut modal = ModalVisibility::Hidden;
    assert!(!modal.dismiss_from_backdrop());
    assert_eq!(modal, ModalVisibility::Hidden);
}

#[test]
fn opening_twice_stays_visible() {
    let mut modal = ModalVisibility::Hidden;
    modal.open();
    modal.open();
    assert_eq!(modal, ModalVisibility::Visible);
}
