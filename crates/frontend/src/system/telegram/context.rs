use contracts::system::telegram::TelegramUser;
use leptos::prelude::*;

/// Профиль пользователя, полученный от хоста при старте. `None` — мост
/// недоступен, покупатель анонимный.
#[derive(Clone, Copy)]
pub struct TelegramContext {
    pub user: RwSignal<Option<TelegramUser>>,
}

impl TelegramContext {
    pub fn new() -> Self {
        Self {
            user: RwSignal::new(None),
        }
    }

    pub fn first_name(&self) -> Option<String> {
        self.user
            .with(|user| user.as_ref().map(|u| u.first_name.clone()))
    }
}

pub fn use_telegram() -> TelegramContext {
    use_context::<TelegramContext>().expect("TelegramContext provider not found")
}
