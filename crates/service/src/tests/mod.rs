/// Entity CRUD behavior over the real schema
mod entity_tests;

/// Pure association link behavior (add / find_one / list / associate /
/// remove)
mod link_tests;

/// Attributed association link behavior (collector-album, prize-performer)
mod attributed_tests;
