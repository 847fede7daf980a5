//! Club store
//!
//! In-memory store for everything a club tracks: teams, rosters,
//! competitions, games and recorded actions. The store is plain data:
//! construct it explicitly and pass it by reference to whatever needs it.
//! There is deliberately no module-level singleton.
//!
//! Ordering guarantees: game actions come back oldest first (timeline
//! order), player actions newest first, team games newest first.

pub mod error;

pub use error::StoreError;

use chrono::Utc;
use uuid::Uuid;

use crate::court::CourtPosition;
use crate::models::{
    Action, ActionPatch, ActionType, Competition, CompetitionPatch, Game, GameLocation, GamePatch,
    GameStatus, Player, PlayerPatch, PlayerPosition, Team, TeamCategory, TeamPatch,
};
use crate::save::format::{ClubSave, ClubSettings};

pub type StoreResult<T> = Result<T, StoreError>;

/// All state of one coach's club.
#[derive(Debug, Clone, Default)]
pub struct ClubStore {
    teams: Vec<Team>,
    players: Vec<Player>,
    competitions: Vec<Competition>,
    games: Vec<Game>,
    actions: Vec<Action>,
    settings: ClubSettings,
}

impl ClubStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn settings(&self) -> &ClubSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut ClubSettings {
        &mut self.settings
    }

    // ========================
    // Teams
    // ========================

    pub fn create_team(
        &mut self,
        name: impl Into<String>,
        category: TeamCategory,
    ) -> StoreResult<Team> {
        let team = Team::new(name, category);
        team.validate().map_err(StoreError::Validation)?;
        log::info!("Created team '{}' ({})", team.name, team.category.code());
        self.teams.push(team.clone());
        Ok(team)
    }

    pub fn team(&self, id: Uuid) -> StoreResult<&Team> {
        self.teams.iter().find(|t| t.id == id).ok_or(StoreError::not_found("team", id))
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn update_team(&mut self, id: Uuid, patch: TeamPatch) -> StoreResult<Team> {
        let team = self
            .teams
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::not_found("team", id))?;
        // Validate the patched copy before committing anything.
        let mut updated = team.clone();
        if let Some(name) = patch.name {
            updated.name = name;
        }
        if let Some(category) = patch.category {
            updated.category = category;
        }
        updated.validate().map_err(StoreError::Validation)?;
        *team = updated.clone();
        Ok(updated)
    }

    /// Delete a team and everything hanging off it.
    pub fn delete_team(&mut self, id: Uuid) -> StoreResult<()> {
        self.team(id)?;
        let game_ids: Vec<Uuid> =
            self.games.iter().filter(|g| g.team_id == id).map(|g| g.id).collect();
        self.actions.retain(|a| !game_ids.contains(&a.game_id));
        self.games.retain(|g| g.team_id != id);
        self.competitions.retain(|c| c.team_id != id);
        self.players.retain(|p| p.team_id != id);
        self.teams.retain(|t| t.id != id);
        log::info!("Deleted team {} and its dependents", id);
        Ok(())
    }

    // ========================
    // Players
    // ========================

    pub fn create_player(
        &mut self,
        name: impl Into<String>,
        number: u8,
        position: PlayerPosition,
        team_id: Uuid,
    ) -> StoreResult<Player> {
        self.team(team_id)?;
        let player = Player::new(name, number, position, team_id);
        player.validate().map_err(StoreError::Validation)?;
        if self.players.iter().any(|p| p.team_id == team_id && p.number == number) {
            return Err(StoreError::DuplicateNumber { number });
        }
        self.players.push(player.clone());
        Ok(player)
    }

    pub fn player(&self, id: Uuid) -> StoreResult<&Player> {
        self.players.iter().find(|p| p.id == id).ok_or(StoreError::not_found("player", id))
    }

    /// Roster of a team, sorted by jersey number.
    pub fn team_players(&self, team_id: Uuid) -> StoreResult<Vec<&Player>> {
        self.team(team_id)?;
        let mut roster: Vec<&Player> =
            self.players.iter().filter(|p| p.team_id == team_id).collect();
        roster.sort_by_key(|p| p.number);
        Ok(roster)
    }

    pub fn update_player(&mut self, id: Uuid, patch: PlayerPatch) -> StoreResult<Player> {
        let (team_id, current_number) = {
            let player = self.player(id)?;
            (player.team_id, player.number)
        };
        if let Some(number) = patch.number {
            if number != current_number
                && self.players.iter().any(|p| p.team_id == team_id && p.number == number)
            {
                return Err(StoreError::DuplicateNumber { number });
            }
        }
        let player = self
            .players
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::not_found("player", id))?;
        let mut updated = player.clone();
        if let Some(name) = patch.name {
            updated.name = name;
        }
        if let Some(number) = patch.number {
            updated.number = number;
        }
        if let Some(position) = patch.position {
            updated.position = position;
        }
        updated.validate().map_err(StoreError::Validation)?;
        *player = updated.clone();
        Ok(updated)
    }

    /// Delete a player and their recorded actions, keeping game scores
    /// consistent.
    pub fn delete_player(&mut self, id: Uuid) -> StoreResult<()> {
        self.player(id)?;
        let removed: Vec<Action> =
            self.actions.iter().filter(|a| a.player_id == id).cloned().collect();
        for action in &removed {
            self.unapply_score(action.game_id, action.action_type);
        }
        self.actions.retain(|a| a.player_id != id);
        self.players.retain(|p| p.id != id);
        log::info!("Deleted player {} ({} actions removed)", id, removed.len());
        Ok(())
    }

    // ========================
    // Competitions
    // ========================

    pub fn create_competition(
        &mut self,
        name: impl Into<String>,
        team_id: Uuid,
    ) -> StoreResult<Competition> {
        self.team(team_id)?;
        let competition = Competition::new(name, team_id);
        competition.validate().map_err(StoreError::Validation)?;
        self.competitions.push(competition.clone());
        Ok(competition)
    }

    pub fn competition(&self, id: Uuid) -> StoreResult<&Competition> {
        self.competitions
            .iter()
            .find(|c| c.id == id)
            .ok_or(StoreError::not_found("competition", id))
    }

    pub fn team_competitions(&self, team_id: Uuid) -> StoreResult<Vec<&Competition>> {
        self.team(team_id)?;
        Ok(self.competitions.iter().filter(|c| c.team_id == team_id).collect())
    }

    pub fn update_competition(
        &mut self,
        id: Uuid,
        patch: CompetitionPatch,
    ) -> StoreResult<Competition> {
        let competition = self
            .competitions
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(StoreError::not_found("competition", id))?;
        let mut updated = competition.clone();
        if let Some(name) = patch.name {
            updated.name = name;
        }
        updated.validate().map_err(StoreError::Validation)?;
        *competition = updated.clone();
        Ok(updated)
    }

    /// Delete a competition; its games survive, unlinked.
    pub fn delete_competition(&mut self, id: Uuid) -> StoreResult<()> {
        self.competition(id)?;
        for game in self.games.iter_mut().filter(|g| g.competition_id == Some(id)) {
            game.competition_id = None;
        }
        self.competitions.retain(|c| c.id != id);
        Ok(())
    }

    // ========================
    // Games
    // ========================

    pub fn create_game(
        &mut self,
        opponent: impl Into<String>,
        date: chrono::DateTime<Utc>,
        location: GameLocation,
        team_id: Uuid,
        competition_id: Option<Uuid>,
    ) -> StoreResult<Game> {
        self.team(team_id)?;
        if let Some(cid) = competition_id {
            let competition = self.competition(cid)?;
            if competition.team_id != team_id {
                return Err(StoreError::ForeignKey(format!(
                    "competition {} belongs to another team",
                    cid
                )));
            }
        }
        let game = Game::new(opponent, date, location, team_id, competition_id);
        game.validate().map_err(StoreError::Validation)?;
        log::info!("Created game vs '{}' for team {}", game.opponent, team_id);
        self.games.push(game.clone());
        Ok(game)
    }

    pub fn game(&self, id: Uuid) -> StoreResult<&Game> {
        self.games.iter().find(|g| g.id == id).ok_or(StoreError::not_found("game", id))
    }

    /// Games of a team, newest first.
    pub fn team_games(&self, team_id: Uuid) -> StoreResult<Vec<&Game>> {
        self.team(team_id)?;
        let mut games: Vec<&Game> = self.games.iter().filter(|g| g.team_id == team_id).collect();
        games.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(games)
    }

    /// Games of a competition, newest first.
    pub fn competition_games(&self, competition_id: Uuid) -> StoreResult<Vec<&Game>> {
        self.competition(competition_id)?;
        let mut games: Vec<&Game> =
            self.games.iter().filter(|g| g.competition_id == Some(competition_id)).collect();
        games.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(games)
    }

    pub fn update_game(&mut self, id: Uuid, patch: GamePatch) -> StoreResult<Game> {
        if let Some(Some(cid)) = patch.competition_id {
            let team_id = self.game(id)?.team_id;
            let competition = self.competition(cid)?;
            if competition.team_id != team_id {
                return Err(StoreError::ForeignKey(format!(
                    "competition {} belongs to another team",
                    cid
                )));
            }
        }
        let game = self
            .games
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or(StoreError::not_found("game", id))?;
        let mut updated = game.clone();
        if let Some(opponent) = patch.opponent {
            updated.opponent = opponent;
        }
        if let Some(score) = patch.opponent_score {
            updated.opponent_score = score;
        }
        if let Some(date) = patch.date {
            updated.date = date;
        }
        if let Some(location) = patch.location {
            updated.location = location;
        }
        if let Some(competition_id) = patch.competition_id {
            updated.competition_id = competition_id;
        }
        updated.updated_at = Utc::now();
        updated.validate().map_err(StoreError::Validation)?;
        *game = updated.clone();
        Ok(updated)
    }

    pub fn set_status(&mut self, id: Uuid, status: GameStatus) -> StoreResult<Game> {
        let game = self
            .games
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or(StoreError::not_found("game", id))?;
        game.status = status;
        game.updated_at = Utc::now();
        log::debug!("Game {} status -> {}", id, status.label());
        Ok(game.clone())
    }

    /// Delete a game and its actions.
    pub fn delete_game(&mut self, id: Uuid) -> StoreResult<()> {
        self.game(id)?;
        self.actions.retain(|a| a.game_id != id);
        self.games.retain(|g| g.id != id);
        Ok(())
    }

    // ========================
    // Actions
    // ========================

    /// Record one action.
    ///
    /// The position is clamped to the court rectangle before storage (the
    /// documented out-of-range policy), and scoring actions bump the
    /// game's score.
    pub fn record_action(
        &mut self,
        action_type: ActionType,
        position: CourtPosition,
        player_id: Uuid,
        game_id: Uuid,
    ) -> StoreResult<Action> {
        self.check_action_refs(player_id, game_id)?;
        let action = Action::new(action_type, position.clamp_to_court(), player_id, game_id);
        self.apply_score(game_id, action_type);
        log::debug!(
            "Recorded {} at ({:.2}, {:.2}) for player {}",
            action_type.code(),
            action.position.x,
            action.position.y,
            player_id
        );
        self.actions.push(action.clone());
        Ok(action)
    }

    /// Record a batch of actions. Validation runs for the whole batch
    /// before anything is inserted, so a bad entry leaves the store
    /// untouched.
    pub fn record_actions(
        &mut self,
        entries: Vec<(ActionType, CourtPosition, Uuid, Uuid)>,
    ) -> StoreResult<Vec<Action>> {
        for (_, _, player_id, game_id) in &entries {
            self.check_action_refs(*player_id, *game_id)?;
        }
        let mut created = Vec::with_capacity(entries.len());
        for (action_type, position, player_id, game_id) in entries {
            created.push(self.record_action(action_type, position, player_id, game_id)?);
        }
        Ok(created)
    }

    /// Actions of a game, oldest first (timeline order).
    pub fn game_actions(&self, game_id: Uuid) -> StoreResult<Vec<&Action>> {
        self.game(game_id)?;
        let mut actions: Vec<&Action> =
            self.actions.iter().filter(|a| a.game_id == game_id).collect();
        actions.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(actions)
    }

    /// Actions of a player across games, newest first.
    pub fn player_actions(&self, player_id: Uuid) -> StoreResult<Vec<&Action>> {
        self.player(player_id)?;
        let mut actions: Vec<&Action> =
            self.actions.iter().filter(|a| a.player_id == player_id).collect();
        actions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(actions)
    }

    pub fn update_action(&mut self, id: Uuid, patch: ActionPatch) -> StoreResult<Action> {
        let (game_id, old_type) = {
            let action = self
                .actions
                .iter()
                .find(|a| a.id == id)
                .ok_or(StoreError::not_found("action", id))?;
            (action.game_id, action.action_type)
        };
        if let Some(player_id) = patch.player_id {
            self.check_action_refs(player_id, game_id)?;
        }
        if let Some(new_type) = patch.action_type {
            if new_type != old_type {
                self.unapply_score(game_id, old_type);
                self.apply_score(game_id, new_type);
            }
        }
        let action = self
            .actions
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(StoreError::not_found("action", id))?;
        if let Some(action_type) = patch.action_type {
            action.action_type = action_type;
        }
        if let Some(position) = patch.position {
            action.position = position.clamp_to_court();
        }
        if let Some(player_id) = patch.player_id {
            action.player_id = player_id;
        }
        Ok(action.clone())
    }

    /// Delete an action, reversing its score contribution.
    pub fn delete_action(&mut self, id: Uuid) -> StoreResult<()> {
        let (game_id, action_type) = {
            let action = self
                .actions
                .iter()
                .find(|a| a.id == id)
                .ok_or(StoreError::not_found("action", id))?;
            (action.game_id, action.action_type)
        };
        self.unapply_score(game_id, action_type);
        self.actions.retain(|a| a.id != id);
        Ok(())
    }

    fn check_action_refs(&self, player_id: Uuid, game_id: Uuid) -> StoreResult<()> {
        let game = self.game(game_id)?;
        let player = self.player(player_id)?;
        if player.team_id != game.team_id {
            return Err(StoreError::ForeignKey(format!(
                "player {} does not belong to the game's team",
                player_id
            )));
        }
        Ok(())
    }

    fn apply_score(&mut self, game_id: Uuid, action_type: ActionType) {
        if let Some(game) = self.games.iter_mut().find(|g| g.id == game_id) {
            game.score += action_type.points();
            game.updated_at = Utc::now();
        }
    }

    fn unapply_score(&mut self, game_id: Uuid, action_type: ActionType) {
        if let Some(game) = self.games.iter_mut().find(|g| g.id == game_id) {
            game.score = game.score.saturating_sub(action_type.points());
            game.updated_at = Utc::now();
        }
    }

    // ========================
    // Persistence
    // ========================

    /// Snapshot the store into the save format.
    pub fn to_save(&self) -> ClubSave {
        ClubSave {
            version: crate::save::SAVE_VERSION,
            timestamp: crate::save::format::current_timestamp(),
            teams: self.teams.clone(),
            players: self.players.clone(),
            competitions: self.competitions.clone(),
            games: self.games.clone(),
            actions: self.actions.clone(),
            settings: self.settings.clone(),
        }
    }

    /// Rebuild a store from a loaded save.
    pub fn from_save(save: &ClubSave) -> Self {
        Self {
            teams: save.teams.clone(),
            players: save.players.clone(),
            competitions: save.competitions.clone(),
            games: save.games.clone(),
            actions: save.actions.clone(),
            settings: save.settings.clone(),
        }
    }
}
