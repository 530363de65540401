/// Builds a [`RouteTable`](crate::RouteTable) from `METHOD "pattern" => target` entries,
/// registered in the order written. Panics on an invalid pattern.
///
/// ```
/// use route_table::{route_table, HttpMethod, RouteTable};
///
/// let table: RouteTable<i32> = route_table! {
///     BEFORE "+/*paths" => 0,
///     GET "/hello/:name" => 1,
///     POST "/hello" => 2,
/// };
/// assert_eq!(*table.find_first(HttpMethod::Get, "/hello/world").unwrap().target(), 1);
/// ```
#[macro_export]
macro_rules! route_table {
    {@entry $table:expr, GET, $pattern:expr, $data:expr} => {
        $table.insert($crate::HttpMethod::Get, $pattern, $data)
    };
    {@entry $table:expr, POST, $pattern:expr, $data:expr} => {
        $table.insert($crate::HttpMethod::Post, $pattern, $data)
    };
    {@entry $table:expr, PUT, $pattern:expr, $data:expr} => {
        $table.insert($crate::HttpMethod::Put, $pattern, $data)
    };
    {@entry $table:expr, PATCH, $pattern:expr, $data:expr} => {
        $table.insert($crate::HttpMethod::Patch, $pattern, $data)
    };
    {@entry $table:expr, DELETE, $pattern:expr, $data:expr} => {
        $table.insert($crate::HttpMethod::Delete, $pattern, $data)
    };
    {@entry $table:expr, HEAD, $pattern:expr, $data:expr} => {
        $table.insert($crate::HttpMethod::Head, $pattern, $data)
    };
    {@entry $table:expr, TRACE, $pattern:expr, $data:expr} => {
        $table.insert($crate::HttpMethod::Trace, $pattern, $data)
    };
    {@entry $table:expr, CONNECT, $pattern:expr, $data:expr} => {
        $table.insert($crate::HttpMethod::Connect, $pattern, $data)
    };
    {@entry $table:expr, OPTIONS, $pattern:expr, $data:expr} => {
        $table.insert($crate::HttpMethod::Options, $pattern, $data)
    };
    {@entry $table:expr, BEFORE, $pattern:expr, $data:expr} => {
        $table.insert($crate::HttpMethod::Before, $pattern, $data)
    };
    {@entry $table:expr, AFTER, $pattern:expr, $data:expr} => {
        $table.insert($crate::HttpMethod::After, $pattern, $data)
    };
    {@entry $table:expr, AFTERAFTER, $pattern:expr, $data:expr} => {
        $table.insert($crate::HttpMethod::AfterAfter, $pattern, $data)
    };

    {$($method:tt $pattern:expr => $data:expr),+ $(,)?} => {{
        let __table = $crate::RouteTable::new();
        $($crate::route_table!(@entry __table, $method, $pattern, $data);)+
        __table
    }};
}
