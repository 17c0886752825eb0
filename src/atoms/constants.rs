// HotelChat — Atoms: Constants

// ── Identity & persistence ───────────────────────────────────────────

/// User id assumed when the host never identified the visitor.
pub const DEFAULT_USER_ID: &str = "guest";

/// Per-user history keys are this prefix plus the user id, so two
/// visitors on the same machine never read each other's transcript.
pub const STORAGE_KEY_PREFIX: &str = "hotel_chat_history_";

// ── Wire ─────────────────────────────────────────────────────────────

/// Where the widget posts each message unless the host overrides it.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/api/chatbot/message";

// ── Canned assistant replies ─────────────────────────────────────────

/// First bubble of every fresh conversation.
pub const GREETING: &str = "Xin chào 👋 Mình là trợ lý ảo của HotelBooking. \
    Bạn cần hỗ trợ tìm khách sạn, khuyến mãi hay đặt phòng không?";

/// Shown when the service answered but had nothing usable to say.
pub const NO_ANSWER_FALLBACK: &str =
    "Xin lỗi, hiện mình không thể trả lời yêu cầu này. Vui lòng thử lại sau.";

/// Shown when the round trip itself failed.
pub const CONNECTION_FALLBACK: &str = "Đã có lỗi kết nối tới trợ lý. \
    Vui lòng kiểm tra lại mạng hoặc thử lại sau ít phút.";

// ── Widget chrome ────────────────────────────────────────────────────

pub const WIDGET_TITLE: &str = "Trợ lý HotelBooking";
pub const WIDGET_SUBTITLE: &str = "Hỏi mình bất cứ điều gì về đặt phòng";
pub const INPUT_PLACEHOLDER: &str = "Nhập câu hỏi của bạn...";
