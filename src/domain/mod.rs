// ============================================================================
// Domain Layer
// ============================================================================
//
// Request-local domain logic. Money arithmetic is the only component with
// real invariants here; everything else on the checkout path is wire data
// passed between backends.
//
// ============================================================================

pub mod money;
