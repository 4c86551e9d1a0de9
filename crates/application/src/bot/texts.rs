//! User-facing strings. Messages are sent with HTML parse mode.

use domain::action::format_timestamp;
use domain::pagination::Page;
use domain::{ActionKind, HistoryEntry};
use std::fmt::Write;

pub const START: &str = "🇹🇷 Merhaba!\nScooter listesini görmek için /liste yazın.";
pub const INVALID_NUMBER: &str = "❌ Geçersiz numara.";
pub const ADMIN_ONLY: &str = "❌ Sadece admin.";
pub const ADMIN_MENU: &str = "🔧 <b>Admin menüsü:</b>";
pub const NO_RECORDS: &str = "📝 Kayıt yok.";
pub const NO_RECORDS_TODAY: &str = "📝 Bugün kayıt yok.";
pub const FULL_REPORT_CAPTION: &str = "📊 Genel rapor hazır.";
pub const DAILY_REPORT_CAPTION: &str = "📊 Günlük rapor hazır.";
pub const HISTORY_USAGE: &str = "ℹ️ Kullanım: /history 105";
pub const REPORT_USAGE: &str = "Format:\n/report 2025-01-01";
pub const GENERIC_FAILURE: &str = "❌ Bir hata oluştu, lütfen tekrar deneyin.";

/// History messages show at most this many of the newest entries
pub const HISTORY_LIMIT: usize = 50;

pub fn scooter_page(page: &Page<i64>) -> String {
    let mut text = format!(
        "📋 Scooter Listesi (Sayfa {}/{}):\n\n",
        page.number, page.total_pages
    );
    for number in &page.items {
        let _ = writeln!(text, "🛵 {number} — /s{number}");
    }
    text
}

pub fn scooter_detail(number: i64) -> String {
    format!("🛵 Scooter {number}\nİşaretleyin:")
}

pub fn recorded(action: ActionKind) -> &'static str {
    match action {
        ActionKind::Seen => "👁️ Görüldü kaydedildi",
        ActionKind::Battery => "🔋 Batarya değişti",
        ActionKind::Repair => "🔧 Tamir için işaretlendi",
    }
}

pub fn button_label(action: ActionKind) -> &'static str {
    match action {
        ActionKind::Seen => "👁️ Görüldü",
        ActionKind::Battery => "🔋 Batarya Değişti",
        ActionKind::Repair => "🔧 Tamir",
    }
}

pub fn status_title(action: ActionKind) -> &'static str {
    match action {
        ActionKind::Seen => "Görülen Scooterlar",
        ActionKind::Battery => "Batarya Değişenler",
        ActionKind::Repair => "Tamirdeki Scooterlar",
    }
}

pub fn my_id(user_id: i64) -> String {
    format!("Sizin ID: <b>{user_id}</b>")
}

pub fn cleared(deleted: u64) -> String {
    format!("🧹 Veritabanı temizlendi ({deleted} kayıt silindi).")
}

pub fn no_records_on(day: &str) -> String {
    format!("📝 {day} tarihinde kayıt yok.")
}

pub fn status_list(action: ActionKind, scooters: &[i64]) -> String {
    let title = status_title(action);
    if scooters.is_empty() {
        return format!("📝 {title}: Kayıt yok.");
    }
    let mut text = format!("📋 <b>{title}</b>:\n\n");
    for number in scooters {
        let _ = writeln!(text, "🛵 {number}");
    }
    text
}

pub fn history(number: i64, entries: &[HistoryEntry]) -> String {
    if entries.is_empty() {
        return format!("📝 Scooter {number}: Kayıt yok.");
    }
    let mut text = format!("📜 <b>Scooter {number} geçmişi</b>:\n\n");
    let skipped = entries.len().saturating_sub(HISTORY_LIMIT);
    if skipped > 0 {
        let _ = writeln!(text, "… son {HISTORY_LIMIT} kayıt gösteriliyor\n");
    }
    for entry in &entries[skipped..] {
        let _ = writeln!(
            text,
            "{} {} — ID {}",
            format_timestamp(&entry.datetime),
            button_label(entry.action),
            entry.user_id
        );
    }
    text
}

pub fn help(is_admin: bool) -> String {
    let mut text = String::from(
        "ℹ️ <b>Komutlar</b>\n\
         /liste - Scooter listesi\n\
         /s105 - Scooter 105 için işlem seç\n\
         /myid - Kullanıcı ID'niz",
    );
    if is_admin {
        text.push_str(
            "\n\n🔧 <b>Admin</b>\n\
             /admin - Admin menüsü\n\
             /report - Genel rapor\n\
             /report 2025-01-01 - Günlük rapor\n\
             /history 105 - Scooter geçmişi",
        );
    }
    text
}
