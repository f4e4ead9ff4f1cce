use std::collections::HashMap;

use crate::domain::GameId;
use crate::engine::game::Game;

/// Реестр активных игр.
///
/// Хранит несколько игр по GameId и выдаёт им монотонные идентификаторы.
/// Синхронизация доступа — забота внешнего слоя: реестр сам по себе
/// однопоточный, сетевые обвязки оборачивают его в свой мьютекс.
pub struct GameRegistry {
    games: HashMap<GameId, Game>,
    next_id: GameId,
}

impl GameRegistry {
    /// Создать пустой реестр. Идентификаторы начинаются с 1.
    pub fn new() -> Self {
        Self {
            games: HashMap::new(),
            next_id: 1,
        }
    }

    /// Зарегистрировать игру, вернуть её id.
    pub fn register(&mut self, game: Game) -> GameId {
        let id = self.next_id;
        self.next_id += 1;
        self.games.insert(id, game);
        id
    }

    /// Есть ли игра с таким id.
    pub fn contains(&self, id: GameId) -> bool {
        self.games.contains_key(&id)
    }

    /// Ссылка на игру (read-only).
    pub fn game(&self, id: GameId) -> Option<&Game> {
        self.games.get(&id)
    }

    /// Ссылка на игру (mutable).
    pub fn game_mut(&mut self, id: GameId) -> Option<&mut Game> {
        self.games.get_mut(&id)
    }

    /// Убрать игру из реестра (например, по завершении сессии).
    pub fn remove(&mut self, id: GameId) -> Option<Game> {
        self.games.remove(&id)
    }

    /// Количество активных игр.
    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

impl Default for GameRegistry {
    fn default() -> Self {
        Self::new()
    }
}
