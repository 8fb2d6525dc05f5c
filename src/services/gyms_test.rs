use super::*;

#[test]
fn single_gym_endpoint_uses_id_query() {
    assert_eq!(gym_endpoint(17), "/gyms?id=17");
}
