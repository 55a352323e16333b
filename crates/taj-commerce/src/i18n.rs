//! Display language resolution and UI strings.
//!
//! Language only picks display strings. It never changes routing or
//! pricing.

use serde::{Deserialize, Serialize};

/// Languages the widget can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "jp")]
    Japanese,
}

impl Language {
    /// Language code as stored in `tajLanguage` and passed in `?lang=`.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Japanese => "jp",
        }
    }

    /// Interpret a stored or query code. Anything but `jp` displays English.
    pub fn from_code(code: &str) -> Self {
        if code.trim().eq_ignore_ascii_case("jp") {
            Language::Japanese
        } else {
            Language::English
        }
    }

    /// Look up a UI string.
    pub fn text(&self, text: Text) -> &'static str {
        let (en, jp) = text.pair();
        match self {
            Language::English => en,
            Language::Japanese => jp,
        }
    }
}

/// Everything the page can tell us about the active language.
///
/// Sources are consulted in field order; the first one present wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageSignals {
    /// State of the on-page language toggle, if one is marked active.
    pub toggle: Option<Language>,
    /// Value of the `lang` query parameter.
    pub query: Option<String>,
    /// Stored language preference.
    pub stored: Option<String>,
    /// Current location path.
    pub path: String,
}

impl LanguageSignals {
    /// Resolve the active language.
    pub fn resolve(&self) -> Language {
        if let Some(language) = self.toggle {
            return language;
        }
        if let Some(code) = self.query.as_deref().filter(|c| !c.is_empty()) {
            return Language::from_code(code);
        }
        if let Some(code) = self.stored.as_deref().filter(|c| !c.is_empty()) {
            return Language::from_code(code);
        }
        if self.path.contains("/jp/") || self.path.contains("_jp") {
            return Language::Japanese;
        }
        Language::English
    }
}

/// UI strings shown by the cart widget and its modals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Text {
    CartTitle,
    Total,
    GenerateOrder,
    Processing,
    CartEmpty,
    CurryDetail,
    SecondCurryDetail,
    SpiceDetail,
    DrinkDetail,
    SelectFirstCurry,
    SelectSecondCurry,
    LoadingCurries,
    NoCurryOptions,
    CurryLoadFailed,
    SpiceHeading,
    PortionHeading,
    DrinkHeading,
    PiecesHeading,
    TwoPieces,
    FourPieces,
    CheckoutFailed,
    OrderGenerated,
    ShowQrToStaff,
    QrInstructions,
    OrderQrAlt,
    OrderNumber,
}

impl Text {
    fn pair(&self) -> (&'static str, &'static str) {
        match self {
            Text::CartTitle => ("Cart", "カート"),
            Text::Total => ("Total", "合計"),
            Text::GenerateOrder => ("Generate Order", "注文を生成"),
            Text::Processing => ("Processing...", "処理中..."),
            Text::CartEmpty => ("Your cart is empty", "カートは空です"),
            Text::CurryDetail => ("Curry", "カレー"),
            Text::SecondCurryDetail => ("Curry 2", "カレー2"),
            Text::SpiceDetail => ("Spice", "辛さ"),
            Text::DrinkDetail => ("Drink", "ドリンク"),
            Text::SelectFirstCurry => (" - Select First Curry", " - 1つ目のカレーを選択"),
            Text::SelectSecondCurry => (" - Select Second Curry", " - 2つ目のカレーを選択"),
            Text::LoadingCurries => ("Loading curry options...", "カレーを読み込み中..."),
            Text::NoCurryOptions => ("No curry options available.", "選択できるカレーがありません。"),
            Text::CurryLoadFailed => (
                "Error loading curry options. Please try again.",
                "カレーの読み込みに失敗しました。もう一度お試しください。",
            ),
            Text::SpiceHeading => ("Spice Level", "辛さ"),
            Text::PortionHeading => ("Portion", "ポーション"),
            Text::DrinkHeading => ("Drink", "ドリンク"),
            Text::PiecesHeading => ("Number of Pieces", "個数"),
            Text::TwoPieces => ("2 Pieces (2個)", "2個"),
            Text::FourPieces => ("4 Pieces (4個)", "4個"),
            Text::CheckoutFailed => (
                "Sorry, there was an error processing your order. Please try again or contact the restaurant directly.",
                "申し訳ございませんが、注文の処理中にエラーが発生しました。再度お試しいただくか、レストランに直接お問い合わせください。",
            ),
            Text::OrderGenerated => ("Order Generated!", "注文が生成されました！"),
            Text::ShowQrToStaff => (
                "Show this QR code to staff:",
                "スタッフにこのQRコードを提示してください：",
            ),
            Text::QrInstructions => (
                "Present this QR code to the staff to order. Screenshot this page or keep it open to show the staff to order.",
                "このQRコードをスタッフに提示して注文してください。このページのスクリーンショットを撮ってスタッフに提示してください。",
            ),
            Text::OrderQrAlt => ("Order QR Code", "注文QRコード"),
            Text::OrderNumber => ("Order", "注文番号"),
        }
    }
}
