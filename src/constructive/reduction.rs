//! Fleet-size reduction.

use crate::models::Route;

/// Drops the most expensive routes until at most `vehicles` remain.
///
/// Each step removes the route with the highest cost (the earliest one on
/// ties); remaining costs are not recomputed. With `vehicles` or fewer
/// routes nothing changes. `costs` must be index-aligned with `routes` and
/// stays aligned afterwards. Returns the removed routes in removal order.
///
/// # Examples
///
/// ```
/// use u_savings::models::Route;
/// use u_savings::constructive::reduce_fleet;
///
/// let mut routes = vec![
///     Route::new("D", vec![1]),
///     Route::new("D", vec![2]),
///     Route::new("D", vec![3]),
/// ];
/// let mut costs = vec![10.0, 30.0, 20.0];
///
/// let removed = reduce_fleet(&mut routes, &mut costs, 2);
/// assert_eq!(removed, vec![Route::new("D", vec![2])]);
/// assert_eq!(costs, vec![10.0, 20.0]);
/// ```
pub fn reduce_fleet(routes: &mut Vec<Route>, costs: &mut Vec<f64>, vehicles: usize) -> Vec<Route> {
    let mut removed = Vec::with_capacity(routes.len().saturating_sub(vehicles));
    while routes.len() > vehicles {
        let Some(worst) = most_expensive(costs) else {
            break;
        };
        costs.remove(worst);
        removed.push(routes.remove(worst));
    }
    removed
}

fn most_expensive(costs: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, &cost) in costs.iter().enumerate() {
        match best {
            Some((_, max)) if cost <= max => {}
            _ => best = Some((idx, cost)),
        }
    }
    best.map(|(idx, _)| idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn routes(n: usize) -> Vec<Route> {
        (1..=n).map(|c| Route::new("D", vec![c])).collect()
    }

    #[test]
    fn test_no_change_when_fleet_suffices() {
        let mut r = routes(3);
        let mut c = vec![5.0, 6.0, 7.0];
        assert!(reduce_fleet(&mut r, &mut c, 3).is_empty());
        assert!(reduce_fleet(&mut r, &mut c, 10).is_empty());
        assert_eq!(r.len(), 3);
        assert_eq!(c, vec![5.0, 6.0, 7.0]);
    }

    #[test]
    fn test_removes_most_expensive_first() {
        let mut r = routes(4);
        let mut c = vec![8.0, 3.0, 9.0, 1.0];
        let removed = reduce_fleet(&mut r, &mut c, 2);
        assert_eq!(
            removed,
            vec![Route::new("D", vec![3]), Route::new("D", vec![1])]
        );
        assert_eq!(r, vec![Route::new("D", vec![2]), Route::new("D", vec![4])]);
        assert_eq!(c, vec![3.0, 1.0]);
    }

    #[test]
    fn test_tie_removes_first_occurrence() {
        let mut r = routes(3);
        let mut c = vec![4.0, 9.0, 9.0];
        let removed = reduce_fleet(&mut r, &mut c, 2);
        assert_eq!(removed, vec![Route::new("D", vec![2])]);
        assert_eq!(r, vec![Route::new("D", vec![1]), Route::new("D", vec![3])]);
    }

    #[test]
    fn test_total_never_increases() {
        let mut r = routes(5);
        let mut c = vec![12.5, 3.0, 44.1, 7.7, 20.0];
        let before: f64 = c.iter().sum();
        reduce_fleet(&mut r, &mut c, 1);
        let after: f64 = c.iter().sum();
        assert!(after <= before);
        assert_eq!(c, vec![3.0]);
    }
}
