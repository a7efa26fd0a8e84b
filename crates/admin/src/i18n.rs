//! User-facing text in each supported locale.
//!
//! Status labels live with [`FulfillmentStatus`](merchant_tools_core::FulfillmentStatus)
//! in core; everything else the pages and workflows show is here.

use merchant_tools_core::Locale;

/// Message catalog for one locale.
#[derive(Debug)]
pub struct Messages {
    pub locale: Locale,

    // Page chrome
    pub app_title: &'static str,
    pub index_heading: &'static str,
    pub fulfillment_card_description: &'static str,
    pub fulfillment_card_note: &'static str,
    pub multipass_card_description: &'static str,
    pub multipass_card_behavior: &'static str,

    // Fulfillment page
    pub fulfillment_heading: &'static str,
    pub order_id_label: &'static str,
    pub order_id_help: &'static str,
    pub order_id_placeholder: &'static str,
    pub update_button: &'static str,
    pub order_list_toggle: &'static str,
    pub column_order_id: &'static str,
    pub column_order_name: &'static str,
    pub column_fulfillment_status: &'static str,

    // Multipass page
    pub secret_key_help: &'static str,
    pub mail_address_help: &'static str,
    pub login_url_heading: &'static str,
    pub generate_button: &'static str,

    // Workflow results
    pub update_failed: &'static str,
    pub enter_unfulfilled_order: &'static str,
}

static EN: Messages = Messages {
    locale: Locale::En,
    app_title: "Merchant tools",
    index_heading: "Tools",
    fulfillment_card_description: "Changes the fulfillment status of an order from \"unfulfilled\" to \"fulfilled\".",
    fulfillment_card_note: "The app needs access to protected customer data (Apps > app name > API access > Protected customer data access).",
    multipass_card_description: "Builds a URL that signs a customer into the storefront from the multipass secret and an email address.",
    multipass_card_behavior: "Unknown email addresses get a new customer account before sign-in; known ones sign in as that customer.",
    fulfillment_heading: "Update an order's fulfillment status from \"unfulfilled\" to \"fulfilled\"",
    order_id_label: "Enter an orderId",
    order_id_help: "13 digits",
    order_id_placeholder: "e.g. 5414420775206",
    update_button: "Update",
    order_list_toggle: "Order list",
    column_order_id: "orderId",
    column_order_name: "Order",
    column_fulfillment_status: "Fulfillment status",
    secret_key_help: "Enter the multipass secret (Settings > Customer accounts > Multipass)",
    mail_address_help: "Enter the customer's email address",
    login_url_heading: "Login URL",
    generate_button: "Show Shopify login URL",
    update_failed: "Failed to update the fulfillment status",
    enter_unfulfilled_order: "Please enter an orderId whose fulfillment status is \"unfulfilled\"",
};

static JA: Messages = Messages {
    locale: Locale::Ja,
    app_title: "成果物6",
    index_heading: "アプリ一覧",
    fulfillment_card_description: "指定の注文を「未発送」から「発送済み」に変更します。",
    fulfillment_card_note: "アプリ管理画面から「顧客データへのアクセス許可」の設定が必要です。",
    multipass_card_description: "シークレットキー、メールアドレスを元にshopifyストアに遷移するUrlを表示します。",
    multipass_card_behavior: "shopifyに登録のないメールアドレスの場合は新規顧客作成後にログイン、登録済みの場合は該当の顧客でログインします。",
    fulfillment_heading: "注文のフルフィルメント状況を「未発送」から「発送済み」に更新します",
    order_id_label: "orderIdを入力してください",
    order_id_help: "※半角数字13桁",
    order_id_placeholder: "例: 5414420775206",
    update_button: "更新",
    order_list_toggle: "注文一覧",
    column_order_id: "orderId",
    column_order_name: "注文名",
    column_fulfillment_status: "フルフィルメント状況",
    secret_key_help: "secretKeyを入力（ストア管理画面→設定→お客様アカウント→マルチパスをオンにする）",
    mail_address_help: "mailAddressを入力",
    login_url_heading: "遷移URL",
    generate_button: "shopifyログインURL表示",
    update_failed: "フルフィルメント状況の更新に失敗しました",
    enter_unfulfilled_order: "「未発送」のorderIDを入力してください",
};

impl Messages {
    /// Catalog for `locale`.
    #[must_use]
    pub const fn for_locale(locale: Locale) -> &'static Self {
        match locale {
            Locale::En => &EN,
            Locale::Ja => &JA,
        }
    }

    /// The entered order does not exist. `order_id` is echoed as typed.
    #[must_use]
    pub fn order_not_found(&self, order_id: &str) -> String {
        match self.locale {
            Locale::En => format!("Order [orderId: {order_id}] does not exist"),
            Locale::Ja => format!("[orderId：{order_id}] の注文は存在しません"),
        }
    }

    /// Detail line naming the order's actual status label.
    #[must_use]
    pub fn current_status(&self, order_id: &str, label: &str) -> String {
        match self.locale {
            Locale::En => format!("[orderId: {order_id}] fulfillment status is \"{label}\""),
            Locale::Ja => format!("[orderId：{order_id}] のフルフィルメント状況は「{label}」です"),
        }
    }

    /// Detail line for an order with nothing left to fulfill.
    #[must_use]
    pub fn no_fulfillment_order(&self, order_id: &str) -> String {
        match self.locale {
            Locale::En => format!("[orderId: {order_id}] has no fulfillment order"),
            Locale::Ja => format!("[orderId：{order_id}] にフルフィルメントオーダーがありません"),
        }
    }

    /// Success message; `legacy_id` is the numeric part of the order ID.
    #[must_use]
    pub fn update_complete(&self, legacy_id: &str) -> String {
        match self.locale {
            Locale::En => format!("Update complete [orderId: {legacy_id}]"),
            Locale::Ja => format!("更新完了しました　[orderId：{legacy_id}]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_locale_picks_catalog() {
        assert_eq!(Messages::for_locale(Locale::En).locale, Locale::En);
        assert_eq!(Messages::for_locale(Locale::Ja).locale, Locale::Ja);
        assert_eq!(Messages::for_locale(Locale::Ja).update_button, "更新");
    }

    #[test]
    fn test_order_not_found_echoes_input() {
        let en = Messages::for_locale(Locale::En);
        assert_eq!(
            en.order_not_found("12ab"),
            "Order [orderId: 12ab] does not exist"
        );

        let ja = Messages::for_locale(Locale::Ja);
        assert_eq!(
            ja.order_not_found("12ab"),
            "[orderId：12ab] の注文は存在しません"
        );
    }

    #[test]
    fn test_update_complete() {
        let ja = Messages::for_locale(Locale::Ja);
        assert_eq!(
            ja.update_complete("5414420775206"),
            "更新完了しました　[orderId：5414420775206]"
        );
    }

    #[test]
    fn test_current_status() {
        let ja = Messages::for_locale(Locale::Ja);
        assert_eq!(
            ja.current_status("1", "発送済"),
            "[orderId：1] のフルフィルメント状況は「発送済」です"
        );
    }
}
