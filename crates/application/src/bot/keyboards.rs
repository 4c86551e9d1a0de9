use super::texts;
use crate::intent::CallbackToken;
use domain::ActionKind;
use domain::messaging::{Keyboard, KeyboardButton};
use domain::pagination::Page;

/// One row per action kind
pub fn scooter_actions(number: i64) -> Keyboard {
    ActionKind::ALL.iter().fold(Keyboard::new(), |kb, &kind| {
        kb.row(vec![KeyboardButton::new(
            texts::button_label(kind),
            CallbackToken::Record(kind, number),
        )])
    })
}

pub fn page_navigation<T>(page: &Page<T>) -> Keyboard {
    Keyboard::new().row(vec![
        KeyboardButton::new("⬅️", CallbackToken::Page(page.prev())),
        KeyboardButton::new("➡️", CallbackToken::Page(page.next())),
    ])
}

pub fn admin_menu() -> Keyboard {
    let buttons = [
        ("📊 Günlük Rapor", CallbackToken::AdminToday),
        ("📅 Tarihe Göre Rapor", CallbackToken::AdminByDate),
        (
            "🛠 Tamirdeki Scooterlar",
            CallbackToken::AdminStatusList(ActionKind::Repair),
        ),
        (
            "🔋 Batarya Değişenler",
            CallbackToken::AdminStatusList(ActionKind::Battery),
        ),
        (
            "👁️ Görülenler",
            CallbackToken::AdminStatusList(ActionKind::Seen),
        ),
        ("🧹 Veritabanını Temizle", CallbackToken::AdminClear),
    ];
    buttons.into_iter().fold(Keyboard::new(), |kb, (label, token)| {
        kb.row(vec![KeyboardButton::new(label, token)])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::ScooterFleet;

    #[test]
    fn test_action_tokens() {
        let tokens: Vec<String> = scooter_actions(105).tokens().map(String::from).collect();
        assert_eq!(tokens, vec!["seen_105", "battery_105", "repair_105"]);
    }

    #[test]
    fn test_page_navigation_is_unclamped() {
        let page = ScooterFleet::default().page(1, 20);
        let keyboard = page_navigation(&page);
        let tokens: Vec<&str> = keyboard.tokens().collect();
        assert_eq!(tokens, vec!["page_0", "page_2"]);
    }

    #[test]
    fn test_admin_menu_buttons_parse() {
        let menu = admin_menu();
        assert_eq!(menu.rows.len(), 6);
        for token in menu.tokens() {
            assert!(CallbackToken::parse(token).is_some(), "token {token}");
        }
    }
}
