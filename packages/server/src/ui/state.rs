//! Server state shared by every handler.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::usecase::{
    ClearDishUseCase, ConnectClientUseCase, DisconnectClientUseCase, GetCultureStateUseCase,
    PlaceMoldsUseCase, SendMessageUseCase, UpdateEnvironmentUseCase,
};

/// Shared application state
///
/// Built once at startup and handed to every handler through axum's
/// `State` extractor. Lives as long as the process.
pub struct AppState {
    /// Held while an event is applied and broadcast, and while a client
    /// joins or leaves. Every client sees changes in the order they hit the
    /// culture.
    pub relay_lock: Mutex<()>,
    /// ConnectClientUseCase（クライアント接続のユースケース）
    pub connect_client_usecase: Arc<ConnectClientUseCase>,
    /// DisconnectClientUseCase（クライアント切断のユースケース）
    pub disconnect_client_usecase: Arc<DisconnectClientUseCase>,
    /// SendMessageUseCase（メッセージ送信のユースケース）
    pub send_message_usecase: Arc<SendMessageUseCase>,
    /// UpdateEnvironmentUseCase（環境値更新のユースケース）
    pub update_environment_usecase: Arc<UpdateEnvironmentUseCase>,
    /// PlaceMoldsUseCase（モールド配置のユースケース）
    pub place_molds_usecase: Arc<PlaceMoldsUseCase>,
    /// ClearDishUseCase（シャーレクリアのユースケース）
    pub clear_dish_usecase: Arc<ClearDishUseCase>,
    /// GetCultureStateUseCase（カルチャー状態取得のユースケース）
    pub get_culture_state_usecase: Arc<GetCultureStateUseCase>,
}
